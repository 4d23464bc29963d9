use serde::{Deserialize, Serialize};

use crate::domain::role::Role;
use crate::domain::session::{Session, CENTER_CARDS};
use crate::engine::errors::EngineError;
use crate::engine::validation::{
    validate_expected_players, validate_player_count, validate_pool_size,
};
use crate::engine::RandomSource;

/// Карта, доставшаяся игроку при раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerCard {
    pub name: String,
    pub role: Role,
}

/// Read-only отчёт о раздаче – его читают озвучка и экспорт.
/// Пары {имя, карта} идут в порядке реестра.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DealReport {
    pub players: Vec<PlayerCard>,
    pub center: Vec<Role>,
}

/// Раздача: перемешать пул и разложить карты.
///
/// Порядок действий:
///   1. Все проверки ДО мутаций – неудачная раздача не трогает ни игроков,
///      ни центр (в т.ч. результат предыдущей раздачи).
///   2. Пул копируется в рабочую последовательность, перемешивается и
///      делится split_off'ом на две независимые части: карты игроков и центр.
///      Сам пул не меняется – повторная раздача использует тот же выбор.
///   3. Первые n карт становятся initial_card и current_card игроков
///      в порядке реестра, остальные 3 уходят в центр.
pub fn deal<R: RandomSource>(
    session: &mut Session,
    rng: &mut R,
) -> Result<DealReport, EngineError> {
    let players = session.player_count();
    validate_player_count(players)?;
    validate_expected_players(session)?;
    validate_pool_size(session.pool().len(), players)?;

    let mut cards: Vec<Role> = session.pool().cards().to_vec();
    rng.shuffle(&mut cards);

    let center = cards.split_off(players);
    debug_assert_eq!(center.len(), CENTER_CARDS);

    let mut report_players = Vec::with_capacity(players);
    for (player, role) in session.registry_mut().iter_mut().zip(cards) {
        player.initial_card = Some(role);
        player.current_card = Some(role);
        report_players.push(PlayerCard {
            name: player.name.clone(),
            role,
        });
    }

    session.install_center(center.clone());
    session.mark_initialized();

    Ok(DealReport {
        players: report_players,
        center,
    })
}

/// Вернуть каждому игроку изначально розданную карту.
/// Пул и центр не трогаем. До первой раздачи reset'ить нечего.
pub fn reset_cards(session: &mut Session) -> Result<(), EngineError> {
    if !session.is_initialized() {
        return Err(EngineError::NotInitialized);
    }
    for player in session.registry_mut().iter_mut() {
        player.current_card = player.initial_card;
    }
    Ok(())
}
