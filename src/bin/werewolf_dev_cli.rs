// src/bin/werewolf_dev_cli.rs

use werewolf_engine::domain::Role;
use werewolf_engine::engine::{night_order, SessionManager};
use werewolf_engine::infra::{generate_unique_code, SystemRng};

fn main() {
    println!("werewolf_dev_cli: стартуем dev-сценарий одной сессии…");

    // 1. RNG и менеджер сессий
    let mut rng = SystemRng::default();
    let mut manager = SessionManager::new();

    // 2. Создаём сессию; хост садится первым игроком
    let code = generate_unique_code(&mut rng, |c| manager.has_session(c));
    manager
        .create_session(code.clone(), "Ana")
        .expect("create session");

    println!("Сессия создана, код: {code}");

    // 3. Сажаем остальных игроков и фиксируем их число
    {
        let session = manager.session_mut(&code).expect("session exists");
        for name in ["Bojan", "Cene", "Dani"] {
            session.add_player(name).expect("add player");
        }
        session.set_player_count(4).expect("set player count");
    }

    // 4. Выбор ролей: 4 игрока + 3 в центр = 7 карт
    let picked = [
        Role::Volkodlak,
        Role::Volkodlak,
        Role::Videc,
        Role::Tat,
        Role::Pijanec,
        Role::Mescan,
        Role::Mescan,
    ];
    {
        let session = manager.session_mut(&code).expect("session exists");
        for role in picked {
            session.add_card(role).expect("add card");
        }
        println!("Фаза после выбора ролей: {:?}", session.phase());
    }

    println!();
    println!("================ РАЗДАЧА =================");

    // 5. Раздача
    let report = manager.deal_session(&code, &mut rng).expect("deal");

    for pc in &report.players {
        println!("  {}: {}", pc.name, pc.role);
    }
    println!("Центр:");
    for (i, role) in report.center.iter().enumerate() {
        println!("  карта {}: {}", i + 1, role);
    }

    // 6. Ночной порядок для озвучки
    let session = manager.session(&code).expect("session exists");
    println!();
    println!("Ночной порядок:");
    for role in night_order(session) {
        println!(
            "  {} ({} c, файл {}.wav)",
            role,
            role.turn_duration_secs(),
            role.ascii_name()
        );
    }

    // 7. Имитация ночной механики снаружи ядра + reset
    {
        let session = manager.session_mut(&code).expect("session exists");
        let first = session.players()[0].name.clone();
        session
            .set_current_card(&first, Role::Lovec)
            .expect("swap card");
        println!();
        println!(
            "{first} после подмены: {:?}",
            session.get_player(&first).and_then(|p| p.current_card)
        );
    }

    manager.reset_session(&code).expect("reset");
    let session = manager.session(&code).expect("session exists");
    let first = &session.players()[0];
    println!(
        "{} после reset: {:?} (снова initial_card)",
        first.name, first.current_card
    );
}
