use crate::domain::session::{Session, CENTER_CARDS, MAX_PLAYERS, MIN_PLAYERS};
use crate::engine::errors::EngineError;

/// Число игроков в допустимых границах раздачи.
pub fn validate_player_count(players: usize) -> Result<(), EngineError> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&players) {
        Ok(())
    } else {
        Err(EngineError::InvalidPlayerCount(players))
    }
}

/// Если хост зафиксировал число игроков – реестр обязан ему соответствовать.
pub fn validate_expected_players(session: &Session) -> Result<(), EngineError> {
    match session.expected_players {
        Some(expected) if expected as usize != session.player_count() => {
            Err(EngineError::ExpectedPlayersMismatch {
                expected: expected as usize,
                actual: session.player_count(),
            })
        }
        _ => Ok(()),
    }
}

/// Сохранение карт: в пуле ровно players + 3.
/// Нарушение – жёсткая ошибка до любых мутаций, молчаливых недораздач нет.
pub fn validate_pool_size(pool_len: usize, players: usize) -> Result<(), EngineError> {
    let need = players + CENTER_CARDS;
    if pool_len < need {
        Err(EngineError::InsufficientCards {
            have: pool_len,
            need,
        })
    } else if pool_len > need {
        Err(EngineError::TooManyCards {
            have: pool_len,
            need,
        })
    } else {
        Ok(())
    }
}
