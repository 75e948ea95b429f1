use crate::domain::entities::backtest_result::BacktestResult;
use crate::domain::entities::signal::Signal;
use serde::Serialize;

/// What the `signal` command prints as JSON.
#[derive(Debug, Serialize)]
pub struct SignalReport<'a> {
    pub signal: &'a Signal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backtest: Option<BacktestResult>,
}

/// Human-readable signal card.
pub fn signal_card(signal: &Signal, backtest: Option<&BacktestResult>) -> String {
    let targets: Vec<String> = signal
        .take_profit()
        .iter()
        .enumerate()
        .map(|(i, tp)| format!("TP{} {tp}", i + 1))
        .collect();

    let mut lines = vec![
        format!(
            "{} · {} · {}",
            signal.ticker(),
            signal.asset_class().to_string().to_uppercase(),
            signal.horizon()
        ),
        format!("Действие: {}", signal.action()),
        format!("Вход: {}", signal.entry()),
        format!("Цели: {}", targets.join(" · ")),
        format!("Стоп: {}", signal.stop()),
        format!(
            "Уверенность: {}%",
            (signal.confidence().value() * 100.0).round() as i64
        ),
        format!("Размер позиции: {}% NAV", signal.position_size_pct_nav()),
        String::new(),
        signal.narrative_ru().to_string(),
    ];

    if let Some(alt) = signal.alternatives().first() {
        lines.push(String::new());
        lines.push("Альтернативный план:".into());
        lines.push(format!(
            "- {}: {} от {} → TP1 {}, TP2 {}, стоп {}",
            alt.if_condition, alt.action, alt.entry, alt.take_profit[0], alt.take_profit[1], alt.stop
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "Сигнал создан: {} · Истекает: {}",
        signal.created_at().format("%Y-%m-%d %H:%M UTC"),
        signal.expires_at().format("%Y-%m-%d %H:%M UTC")
    ));

    match backtest {
        Some(bt) => {
            lines.push(String::new());
            lines.push("Игрушечный бэктест:".into());
            lines.push(format!("  PnL после комиссий: {:.2}%", bt.pnl * 100.0));
            lines.push(format!("  Выход по цене: {:.4} ({})", bt.exit_price, bt.exit_reason));
            lines.push(format!("  Шагов до выхода: {}", bt.steps));
        }
        None if !signal.action().is_directional() => {
            lines.push(String::new());
            lines.push("Для WAIT/CLOSE сделок нет: бэктест не запускается.".into());
        }
        None => {}
    }

    lines.push(String::new());
    lines.push(signal.disclaimer().to_string());
    lines.join("\n")
}
