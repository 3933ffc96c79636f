//! Полиномиальная хеш-функция для строковых ключей.
//!
//! Ключ рассматривается как последовательность UTF-16 code units;
//! результат приводится по модулю текущей ёмкости таблицы, поэтому при
//! изменении ёмкости индекс каждого ключа нужно вычислять заново.

/// Множитель полиномиального хеша.
const PRIME: u128 = 31;

/// Возвращает индекс бакета для `key` в таблице из `capacity` бакетов.
///
/// `h = (31 * h + unit) mod capacity` слева направо, начиная с нуля.
/// Результат всегда лежит в `[0, capacity)`.
///
/// `capacity` должна быть не меньше 1.
#[inline]
pub fn polynomial_hash(
    key: &str,
    capacity: usize,
) -> usize {
    debug_assert!(capacity >= 1, "capacity must be positive");

    let modulus = capacity as u128;
    let hash = key
        .encode_utf16()
        .fold(0u128, |acc, unit| (PRIME * acc + u128::from(unit)) % modulus);

    hash as usize
}
