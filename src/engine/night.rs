use crate::domain::role::Role;
use crate::domain::session::Session;

/// Порядок ролей для озвучки ночной фазы.
///
/// Берём initial_card каждого игрока (карты центра не будят никого),
/// оставляем роли с ночным действием и сортируем по `Role::night_order()`.
/// Каждая роль входит один раз, сколько бы игроков её ни получило.
///
/// До раздачи карт ни у кого нет – список пустой.
pub fn night_order(session: &Session) -> Vec<Role> {
    let mut roles: Vec<Role> = session
        .players()
        .iter()
        .filter_map(|p| p.initial_card)
        .filter(|r| r.acts_at_night())
        .collect();

    roles.sort_by_key(|r| r.night_order());
    roles.dedup();
    roles
}
