//! Тесты раздачи: перемешивание, разложение, сохранение карт, reset.

use std::collections::HashMap;

use werewolf_engine::domain::{Role, Session, SessionPhase};
use werewolf_engine::engine::{deal, night_order, reset_cards, EngineError};
use werewolf_engine::infra::DeterministicRng;

// -----------------------------
// ВСПОМОГАТЕЛЬНЫЕ КОНСТРУКТОРЫ
// -----------------------------

/// Сессия с готовым составом: Ana, Bojan, Cene, Dani + 7 ролей.
fn session_ana_bojan_cene_dani() -> Session {
    make_session(
        &["Ana", "Bojan", "Cene", "Dani"],
        &[
            Role::Volkodlak,
            Role::Volkodlak,
            Role::Videc,
            Role::Tat,
            Role::Pijanec,
            Role::Mescan,
            Role::Mescan,
        ],
    )
}

fn make_session(players: &[&str], roles: &[Role]) -> Session {
    let mut session = Session::new("TESTA".to_string(), players[0]);
    for name in players {
        session.add_player(*name).unwrap();
    }
    for role in roles {
        session.add_card(*role).unwrap();
    }
    session
}

/// Мультимножество ролей – для проверки сохранения карт.
fn counts<I: IntoIterator<Item = Role>>(roles: I) -> HashMap<Role, usize> {
    let mut map = HashMap::new();
    for role in roles {
        *map.entry(role).or_insert(0) += 1;
    }
    map
}

// -----------------------------
// РАЗДАЧА
// -----------------------------

/// 4 игрока + 7 ролей: ровно 4 пары {имя, карта} и 3 карты центра,
/// их объединение равно исходному пулу, initial == current.
#[test]
fn deal_four_players_seven_roles() {
    let mut session = session_ana_bojan_cene_dani();
    let pool_before = counts(session.pool().cards().iter().copied());

    let mut rng = DeterministicRng::from_seed(42);
    let report = deal(&mut session, &mut rng).unwrap();

    assert_eq!(report.players.len(), 4);
    assert_eq!(report.center.len(), 3);

    // сохранение карт: ни одна не потерялась и не задублировалась
    let dealt = counts(
        report
            .players
            .iter()
            .map(|pc| pc.role)
            .chain(report.center.iter().copied()),
    );
    assert_eq!(dealt, pool_before);

    // пары идут в порядке реестра
    let names: Vec<&str> = report.players.iter().map(|pc| pc.name.as_str()).collect();
    assert_eq!(names, ["Ana", "Bojan", "Cene", "Dani"]);

    // у каждого игрока initial == current, и совпадает с отчётом
    for pc in &report.players {
        let player = session.get_player(&pc.name).unwrap();
        assert_eq!(player.initial_card, Some(pc.role));
        assert_eq!(player.current_card, Some(pc.role));
    }

    assert!(session.is_initialized());
    assert_eq!(session.phase(), SessionPhase::Dealt);
    assert_eq!(session.center_cards(), report.center.as_slice());

    // сам пул раздачей не тронут
    assert_eq!(counts(session.pool().cards().iter().copied()), pool_before);
}

/// Один seed – одна и та же раздача.
#[test]
fn deal_is_deterministic_for_seed() {
    let mut s1 = session_ana_bojan_cene_dani();
    let mut s2 = session_ana_bojan_cene_dani();

    let r1 = deal(&mut s1, &mut DeterministicRng::from_seed(7)).unwrap();
    let r2 = deal(&mut s2, &mut DeterministicRng::from_seed(7)).unwrap();

    assert_eq!(r1, r2);
}

/// Повторная раздача разрешена и полностью перезаписывает карты и центр.
#[test]
fn redeal_overwrites_cards_and_center() {
    let mut session = session_ana_bojan_cene_dani();
    deal(&mut session, &mut DeterministicRng::from_seed(1)).unwrap();

    // внешняя механика подменила карту – lovec'а в пуле вообще нет
    session.set_current_card("Ana", Role::Lovec).unwrap();

    let report = deal(&mut session, &mut DeterministicRng::from_seed(2)).unwrap();

    // после пере-раздачи подмены не осталось
    let ana = session.get_player("Ana").unwrap();
    assert_eq!(ana.initial_card, Some(report.players[0].role));
    assert_eq!(ana.current_card, ana.initial_card);
    assert_ne!(ana.current_card, Some(Role::Lovec));

    assert_eq!(session.center_cards(), report.center.as_slice());
    assert!(session.is_initialized());
}

/// Границы числа игроков: 3 и 7 – валидные раздачи.
#[test]
fn deal_player_count_bounds_are_inclusive() {
    let mut three = make_session(
        &["Ana", "Bojan", "Cene"],
        &[
            Role::Volkodlak,
            Role::Videc,
            Role::Tat,
            Role::Pijanec,
            Role::Mescan,
            Role::Mescan,
        ],
    );
    let report = deal(&mut three, &mut DeterministicRng::from_seed(3)).unwrap();
    assert_eq!(report.players.len(), 3);
    assert_eq!(report.center.len(), 3);

    let mut seven = make_session(
        &["Ana", "Bojan", "Cene", "Dani", "Eva", "Filip", "Gaja"],
        &[
            Role::Dvojnik,
            Role::Volkodlak,
            Role::Volkodlak,
            Role::Sluzabnik,
            Role::Zidar,
            Role::Zidar,
            Role::Videc,
            Role::Tat,
            Role::Mescan,
            Role::Mescan,
        ],
    );
    let report = deal(&mut seven, &mut DeterministicRng::from_seed(4)).unwrap();
    assert_eq!(report.players.len(), 7);
    assert_eq!(report.center.len(), 3);
}

// -----------------------------
// RESET
// -----------------------------

/// reset возвращает current_card к initial_card даже после внешних подмен.
#[test]
fn reset_restores_initial_cards() {
    let mut session = session_ana_bojan_cene_dani();
    let report = deal(&mut session, &mut DeterministicRng::from_seed(5)).unwrap();

    let center_before = session.center_cards().to_vec();

    // «ночь»: пара внешних подмен
    session.set_current_card("Ana", Role::Lovec).unwrap();
    session.set_current_card("Dani", Role::Nesrecnik).unwrap();

    reset_cards(&mut session).unwrap();

    for pc in &report.players {
        let player = session.get_player(&pc.name).unwrap();
        assert_eq!(player.current_card, Some(pc.role));
        assert_eq!(player.current_card, player.initial_card);
    }

    // пул и центр reset не трогает
    assert_eq!(session.center_cards(), center_before.as_slice());
    assert_eq!(session.pool().len(), 7);

    // повторный reset – no-op
    reset_cards(&mut session).unwrap();
    assert_eq!(
        session.get_player("Ana").unwrap().current_card,
        session.get_player("Ana").unwrap().initial_card
    );
}

/// До первой раздачи reset'ить нечего.
#[test]
fn reset_before_deal_fails() {
    let mut session = session_ana_bojan_cene_dani();
    assert_eq!(
        reset_cards(&mut session).unwrap_err(),
        EngineError::NotInitialized
    );
}

// -----------------------------
// НОЧНОЙ ПОРЯДОК
// -----------------------------

/// night_order: уникальные ночные роли игроков по порядку пробуждения.
#[test]
fn night_order_follows_wakeup_sequence() {
    let mut session = session_ana_bojan_cene_dani();

    // до раздачи карт нет – список пустой
    assert!(night_order(&session).is_empty());

    let report = deal(&mut session, &mut DeterministicRng::from_seed(6)).unwrap();
    let order = night_order(&session);

    // ожидание: уникальные роли игроков с ночным действием, по night_order
    let mut expected: Vec<Role> = report
        .players
        .iter()
        .map(|pc| pc.role)
        .filter(|r| r.acts_at_night())
        .collect();
    expected.sort_by_key(|r| r.night_order());
    expected.dedup();

    assert_eq!(order, expected);

    // порядок строго возрастает – заодно проверяет dedup
    for pair in order.windows(2) {
        assert!(pair[0].night_order() < pair[1].night_order());
    }

    // карты центра никого не будят: ролей из центра в списке нет,
    // если их нет у игроков
    for role in &order {
        assert!(report.players.iter().any(|pc| pc.role == *role));
    }
}
