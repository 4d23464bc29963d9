use thiserror::Error;

/// Ошибки раздачи и reset'а.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Для раздачи нужно от 3 до 7 игроков, а есть {0}")]
    InvalidPlayerCount(usize),

    #[error("В пуле не хватает карт: есть {have}, нужно {need}")]
    InsufficientCards { have: usize, need: usize },

    #[error("В пуле лишние карты: есть {have}, нужно {need}")]
    TooManyCards { have: usize, need: usize },

    #[error("Заявлено {expected} игроков, а в реестре {actual}")]
    ExpectedPlayersMismatch { expected: usize, actual: usize },

    #[error("Раздачи ещё не было")]
    NotInitialized,
}
