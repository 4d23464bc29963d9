//! Движок одной партии "Ena noč volkodlaka" (вариант One Night Werewolf,
//! словенские названия ролей).
//!
//! Что умеет ядро:
//!   - реестр игроков (порядок добавления = порядок раздачи);
//!   - пул карт-ролей с лимитами на каждую роль;
//!   - однократная случайная раздача: каждому игроку по карте + 3 карты в центр;
//!   - reset – вернуть всем игрокам изначально розданные карты.
//!
//! Всё остальное (фронт, озвучка ночной фазы, экспорт в документы) – внешние
//! потребители, которые читают снапшоты через api.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
