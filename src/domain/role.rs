use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Роль (карта) из фиксированного каталога игры.
///
/// Словенские имена – это "проводной" формат: так роли называет фронт,
/// озвучка и печатные материалы. Внутри крейта роль всегда enum, поэтому
/// несуществующая роль непредставима; ошибка UnknownRole живёт только на
/// границе парсинга (FromStr / api).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Role {
    Dvojnik,
    Volkodlak,
    Sluzabnik,
    Zidar,
    Videc,
    Tat,
    Tezavnez,
    Pijanec,
    Nespecnez,
    Lovec,
    Nesrecnik,
    Mescan,
}

impl Role {
    /// Весь каталог в каноническом порядке.
    pub const ALL: [Role; 12] = [
        Role::Dvojnik,
        Role::Volkodlak,
        Role::Sluzabnik,
        Role::Zidar,
        Role::Videc,
        Role::Tat,
        Role::Tezavnez,
        Role::Pijanec,
        Role::Nespecnez,
        Role::Lovec,
        Role::Nesrecnik,
        Role::Mescan,
    ];

    /// Сумма лимитов по всем ролям (16 карт максимум).
    pub fn cap_sum() -> usize {
        Role::ALL.iter().map(|r| r.max_count() as usize).sum()
    }

    /// Максимальное количество копий роли в одной сессии.
    pub const fn max_count(self) -> u8 {
        match self {
            Role::Volkodlak | Role::Zidar => 2,
            Role::Mescan => 3,
            _ => 1,
        }
    }

    /// Позиция роли в ночной фазе (меньше = просыпается раньше).
    /// None – у роли нет ночного действия.
    pub const fn night_order(self) -> Option<u8> {
        match self {
            Role::Dvojnik => Some(0),
            Role::Volkodlak => Some(1),
            Role::Sluzabnik => Some(2),
            Role::Zidar => Some(3),
            Role::Videc => Some(4),
            Role::Tat => Some(5),
            Role::Tezavnez => Some(6),
            Role::Pijanec => Some(7),
            Role::Nespecnez => Some(8),
            Role::Lovec | Role::Nesrecnik | Role::Mescan => None,
        }
    }

    /// Текст инструкции для озвучки ночной фазы (по-словенски).
    pub const fn night_instructions(self) -> Option<&'static str> {
        match self {
            Role::Dvojnik => Some(
                "Ko si na potezi poglej karto drugega igralca. To je tvoja nova vloga. \
                 Če ima tvoja vloga nočno akcijo jo opravi zdaj. Če je tvoja vloga \
                 Služabnik ostani buden in poišči volkodlake.",
            ),
            Role::Volkodlak => Some("Ko si na potezi se spoglej se z drugimi volkodlaki."),
            Role::Sluzabnik => Some("Ko si na potezi poišči volkodlake, ki se razkrijejo"),
            Role::Zidar => Some("Ko si na potezi pogledaj druge zidarje."),
            Role::Videc => Some(
                "Ko si na potezi lahko pogledaš eno karto drugega igralca ali dve karti \
                 na sredini.",
            ),
            Role::Tat => Some(
                "Ko si na potezi lahko svojo karto zamenjaš z drugo karto in pogledaš \
                 svojo novo karto.",
            ),
            Role::Tezavnez => Some("Ko si na potezi lahko zamenjaš karti dveh drugih igralcev."),
            Role::Pijanec => Some("Ko si na potezi zamenjaj svojo karto s karto iz sredine."),
            Role::Nespecnez => Some("Ko si na potezi poglej svojo karto."),
            Role::Lovec | Role::Nesrecnik | Role::Mescan => None,
        }
    }

    /// Сколько секунд отводится роли на ночной ход.
    pub const fn turn_duration_secs(self) -> u32 {
        match self.night_order() {
            Some(_) => 15,
            None => 0,
        }
    }

    /// Есть ли у роли ночное действие.
    pub const fn acts_at_night(self) -> bool {
        self.night_order().is_some()
    }

    /// Имя без диакритики – из него озвучка собирает имена аудиофайлов
    /// ("sluzabnik" -> sluzabnik.wav / sluzabnik_konec.wav).
    pub const fn ascii_name(self) -> &'static str {
        match self {
            Role::Dvojnik => "dvojnik",
            Role::Volkodlak => "volkodlak",
            Role::Sluzabnik => "sluzabnik",
            Role::Zidar => "zidar",
            Role::Videc => "videc",
            Role::Tat => "tat",
            Role::Tezavnez => "tezavnez",
            Role::Pijanec => "pijanec",
            Role::Nespecnez => "nespecnez",
            Role::Lovec => "lovec",
            Role::Nesrecnik => "nesrecnik",
            Role::Mescan => "mescan",
        }
    }
}

impl fmt::Display for Role {
    /// Каноническое словенское имя роли (с диакритикой).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Dvojnik => "dvojnik",
            Role::Volkodlak => "volkodlak",
            Role::Sluzabnik => "služabnik",
            Role::Zidar => "zidar",
            Role::Videc => "videc",
            Role::Tat => "tat",
            Role::Tezavnez => "težavnež",
            Role::Pijanec => "pijanec",
            Role::Nespecnez => "nespečnež",
            Role::Lovec => "lovec",
            Role::Nesrecnik => "nesrečnik",
            Role::Mescan => "meščan",
        };
        write!(f, "{name}")
    }
}

/// Парсинг имени роли. Принимаем и каноническое написание, и вариант
/// без диакритики (так роли пишут в конфигах/URL).
impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let role = match s.trim().to_lowercase().as_str() {
            "dvojnik" => Role::Dvojnik,
            "volkodlak" => Role::Volkodlak,
            "služabnik" | "sluzabnik" => Role::Sluzabnik,
            "zidar" => Role::Zidar,
            "videc" => Role::Videc,
            "tat" => Role::Tat,
            "težavnež" | "tezavnez" => Role::Tezavnez,
            "pijanec" => Role::Pijanec,
            "nespečnež" | "nespecnez" => Role::Nespecnez,
            "lovec" => Role::Lovec,
            "nesrečnik" | "nesrecnik" => Role::Nesrecnik,
            "meščan" | "mescan" => Role::Mescan,
            _ => return Err(format!("Unknown role: {s}")),
        };
        Ok(role)
    }
}
