use crate::domain::values::action::Action;
use crate::domain::values::horizon::Horizon;

fn horizon_ru(horizon: Horizon) -> &'static str {
    match horizon {
        Horizon::Intraday => "внутри дня",
        Horizon::Swing => "на несколько дней",
        Horizon::Position => "на несколько недель",
    }
}

/// Short trader-style comment for the signal card.
pub fn trader_tone_narrative_ru(action: Action, horizon: Horizon, last_price: f64) -> String {
    let frame = horizon_ru(horizon);
    match action {
        Action::Buy => format!(
            "Покупатели удерживают инициативу у {last_price:.4}. Берём лонг от отката, горизонт {frame}. \
             Стоп короткий, частичная фиксация на первой цели."
        ),
        Action::Short => format!(
            "Рынок выдыхается у {last_price:.4}, продавцы активнее. Работаем в шорт от отскока, горизонт {frame}. \
             Стоп за уровнем, без усреднения."
        ),
        Action::Close => format!(
            "Импульс исчерпан у {last_price:.4}. Закрываем позицию и фиксируем результат, горизонт {frame}."
        ),
        Action::Wait => format!(
            "Цена {last_price:.4}, явного перевеса нет. Ждём подтверждения, горизонт {frame}; \
             вход только по альтернативному сценарию."
        ),
    }
}
