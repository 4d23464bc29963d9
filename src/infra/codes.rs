use crate::domain::SessionCode;
use crate::engine::RandomSource;

/// Длина кода сессии.
pub const CODE_LEN: usize = 5;

/// Сгенерировать код сессии: 5 заглавных латинских букв.
///
/// Буквы берём перемешиванием алфавита через RandomSource – движку хватает
/// одной точки входа в RNG (shuffle), трейт не расширяем. Побочный эффект:
/// буквы внутри одного кода не повторяются, на 26P5 вариантов это не важно.
pub fn generate_code<R: RandomSource>(rng: &mut R) -> SessionCode {
    let mut letters: Vec<char> = ('A'..='Z').collect();
    rng.shuffle(&mut letters);
    letters.into_iter().take(CODE_LEN).collect()
}

/// Сгенерировать код, которого ещё нет у вызывающего.
///
/// С SystemRng коллизии практически исключены; с детерминированным RNG
/// вызывающий сам отвечает за то, что свободные коды вообще есть.
pub fn generate_unique_code<R, F>(rng: &mut R, is_taken: F) -> SessionCode
where
    R: RandomSource,
    F: Fn(&str) -> bool,
{
    loop {
        let code = generate_code(rng);
        if !is_taken(&code) {
            return code;
        }
    }
}
