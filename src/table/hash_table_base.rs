use std::slice;

use chainmap_error::{ErrorExt, TableError, TableResult};
use serde::{Deserialize, Deserializer, Serialize};

use super::{
    bucket::{Bucket, Entry},
    hash::polynomial_hash,
};
use crate::config::TableSettings;

/// Порог заполненности по умолчанию.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// Начальное количество бакетов по умолчанию.
pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

/// Хеш-таблица со строковыми ключами и цепочками коллизий.
///
/// **ИНВАРИАНТЫ:**
///
/// - `capacity >= 1` и `buckets.len() == capacity`
/// - каждый ключ встречается не более одного раза
/// - запись с ключом `k` лежит в бакете `polynomial_hash(k, capacity)`
/// - `size` равен сумме длин всех бакетов
///
/// Когда `size / capacity` становится строго больше `load_factor`, таблица
/// удваивает ёмкость и перераспределяет все записи. Удаление ёмкость не
/// уменьшает.
#[derive(Debug, Clone, Serialize)]
pub struct HashTable<V> {
    buckets: Vec<Bucket<V>>,
    capacity: usize,
    #[serde(skip)]
    size: usize,
    load_factor: f64,
}

/// Итератор по таблице (разделяемая ссылка).
///
/// Порядок обхода: бакеты по возрастанию индекса, внутри бакета — в порядке
/// добавления.
pub struct Iter<'a, V> {
    buckets: slice::Iter<'a, Bucket<V>>,
    current: slice::Iter<'a, Entry<V>>,
    remaining: usize,
}

/// Сериализованное представление таблицы; раскладка по бакетам при
/// десериализации строится заново.
#[derive(Deserialize)]
struct TableRepr<V> {
    load_factor: f64,
    capacity: usize,
    buckets: Vec<Bucket<V>>,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl<V> HashTable<V> {
    /// Создаёт пустую таблицу.
    ///
    /// Возвращает [`TableError::InvalidConfig`], если `initial_capacity < 1`
    /// или `load_factor` не является положительным конечным числом.
    pub fn new(
        load_factor: f64,
        initial_capacity: usize,
    ) -> TableResult<Self> {
        if let Err(err) = Self::validate(load_factor, initial_capacity) {
            tracing::debug!(
                load_factor,
                initial_capacity,
                status = %err.status_code(),
                error = %err,
                "Rejected hash table configuration"
            );
            return Err(err);
        }

        Ok(Self::allocate(load_factor, initial_capacity))
    }

    /// Таблица с параметрами по умолчанию (0.75, 16).
    pub fn with_defaults() -> Self {
        Self::allocate(DEFAULT_LOAD_FACTOR, DEFAULT_INITIAL_CAPACITY)
    }

    /// Создаёт таблицу по загруженным настройкам.
    pub fn from_settings(settings: &TableSettings) -> TableResult<Self> {
        Self::new(settings.load_factor, settings.initial_capacity)
    }

    /// Вставляет пару `(key, value)`.
    ///
    /// Если ключ уже есть, значение перезаписывается и возвращается `false`.
    /// Новый ключ увеличивает размер и может вызвать рост таблицы.
    ///
    /// Рост за один вызов ограничен одним удвоением: при `load_factor < 0.5`
    /// отношение `length / capacity` после него может остаться выше порога.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: V,
    ) -> bool {
        let inserted = self.insert_entry(key.into(), value);

        if inserted && self.exceeds_load_factor() {
            self.grow();
        }

        inserted
    }

    /// Возвращает `Some(&V)` для указанного ключа или `None`.
    pub fn get(
        &self,
        key: &str,
    ) -> Option<&V> {
        self.bucket(key).find(key).map(|e| &e.value)
    }

    /// Возвращает `Some(&mut V)` для указанного ключа или `None`.
    pub fn get_mut(
        &mut self,
        key: &str,
    ) -> Option<&mut V> {
        let idx = self.bucket_index(key);
        self.buckets[idx].find_mut(key).map(|e| &mut e.value)
    }

    /// Проверяет, есть ли в таблице ключ.
    pub fn has(
        &self,
        key: &str,
    ) -> bool {
        self.bucket(key).find(key).is_some()
    }

    /// Удаляет ключ. Возвращает `true`, если удаление произошло.
    pub fn remove(
        &mut self,
        key: &str,
    ) -> bool {
        let idx = self.bucket_index(key);

        match self.buckets[idx].remove(key) {
            Some(_) => {
                self.size -= 1;
                true
            }
            None => false,
        }
    }

    /// Количество записей.
    #[inline]
    pub fn length(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Текущее количество бакетов.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Удаляет все записи. Ёмкость сохраняется.
    pub fn clear(&mut self) {
        self.buckets = Self::empty_buckets(self.capacity);
        self.size = 0;

        tracing::trace!(capacity = self.capacity, "Hash table cleared");
    }

    /// Снимок всех ключей.
    pub fn keys(&self) -> Vec<String> {
        self.iter().map(|(k, _)| k.to_string()).collect()
    }

    /// Снимок всех значений.
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.iter().map(|(_, v)| v.clone()).collect()
    }

    /// Снимок всех пар `(ключ, значение)`.
    pub fn entries(&self) -> Vec<(String, V)>
    where
        V: Clone,
    {
        self.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    /// Возвращает итератор по парам `(&str, &V)`.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            buckets: self.buckets.iter(),
            current: slice::Iter::default(),
            remaining: self.size,
        }
    }

    fn validate(
        load_factor: f64,
        initial_capacity: usize,
    ) -> TableResult<()> {
        if initial_capacity < 1 {
            return Err(TableError::InvalidConfig {
                parameter: "initial_capacity",
                reason: format!("must be at least 1, got {initial_capacity}"),
            });
        }

        if !(load_factor.is_finite() && load_factor > 0.0) {
            return Err(TableError::InvalidConfig {
                parameter: "load_factor",
                reason: format!("must be a positive finite number, got {load_factor}"),
            });
        }

        Ok(())
    }

    fn allocate(
        load_factor: f64,
        capacity: usize,
    ) -> Self {
        HashTable {
            buckets: Self::empty_buckets(capacity),
            capacity,
            size: 0,
            load_factor,
        }
    }

    fn empty_buckets(capacity: usize) -> Vec<Bucket<V>> {
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Bucket::new);
        buckets
    }

    #[inline]
    fn bucket_index(
        &self,
        key: &str,
    ) -> usize {
        polynomial_hash(key, self.capacity)
    }

    #[inline]
    fn bucket(
        &self,
        key: &str,
    ) -> &Bucket<V> {
        &self.buckets[self.bucket_index(key)]
    }

    /// Перезаписывает значение существующего ключа или добавляет запись в
    /// конец бакета. Рост таблицы не проверяет.
    fn insert_entry(
        &mut self,
        key: String,
        value: V,
    ) -> bool {
        let idx = self.bucket_index(&key);
        let bucket = &mut self.buckets[idx];

        if let Some(entry) = bucket.find_mut(&key) {
            entry.value = value;
            return false;
        }

        bucket.push(key, value);
        self.size += 1;
        true
    }

    #[inline]
    fn exceeds_load_factor(&self) -> bool {
        self.size as f64 / self.capacity as f64 > self.load_factor
    }

    /// Удваивает ёмкость и переносит все записи в новые бакеты.
    ///
    /// Выполняется не более одного удвоения за вызов `set`.
    fn grow(&mut self) {
        let old_capacity = self.capacity;
        let new_capacity = old_capacity.saturating_mul(2);

        let old_buckets = std::mem::replace(&mut self.buckets, Self::empty_buckets(new_capacity));
        self.capacity = new_capacity;
        self.size = 0;

        for bucket in old_buckets {
            for entry in bucket.into_entries() {
                self.insert_entry(entry.key, entry.value);
            }
        }

        debug_assert_eq!(
            self.buckets.iter().map(Bucket::len).sum::<usize>(),
            self.size
        );

        tracing::debug!(
            old_capacity,
            new_capacity,
            size = self.size,
            "Hash table grew"
        );
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов для HashTable, Iter
////////////////////////////////////////////////////////////////////////////////

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // Отдаём следующую запись текущего бакета, если она есть.
            if let Some(entry) = self.current.next() {
                self.remaining -= 1;
                return Some((entry.key.as_str(), &entry.value));
            }

            // Берём следующий бакет.
            self.current = self.buckets.next()?.entries().iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<'a, V> IntoIterator for &'a HashTable<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl<K, V> Extend<(K, V)> for HashTable<V>
where
    K: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(
        &mut self,
        iter: I,
    ) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for HashTable<V>
where
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::with_defaults();
        table.extend(iter);
        table
    }
}

impl<'de, V> Deserialize<'de> for HashTable<V>
where
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = TableRepr::<V>::deserialize(deserializer)?;

        // Сериализация всегда пишет ровно `capacity` бакетов.
        if repr.capacity != repr.buckets.len() {
            return Err(<D::Error as serde::de::Error>::custom(
                TableError::InvalidConfig {
                    parameter: "capacity",
                    reason: format!(
                        "expected {} buckets, got {}",
                        repr.capacity,
                        repr.buckets.len()
                    ),
                },
            ));
        }

        let mut table = Self::new(repr.load_factor, repr.capacity)
            .map_err(<D::Error as serde::de::Error>::custom)?;

        // Индексы пересчитываются: раскладке из входных данных не доверяем.
        for bucket in repr.buckets {
            for entry in bucket.into_entries() {
                table.set(entry.key, entry.value);
            }
        }

        Ok(table)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
