use serde::{Deserialize, Serialize};

/// Пара ключ-значение внутри бакета.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Entry<V> {
    pub(crate) key: String,
    pub(crate) value: V,
}

/// Цепочка коллизий: записи, чьи ключи попали в один слот.
///
/// Записи хранятся в порядке добавления.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct Bucket<V> {
    entries: Vec<Entry<V>>,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl<V> Bucket<V> {
    pub(crate) fn new() -> Self {
        Bucket {
            entries: Vec::new(),
        }
    }

    /// Ищет запись с ключом `key`.
    pub(crate) fn find(
        &self,
        key: &str,
    ) -> Option<&Entry<V>> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub(crate) fn find_mut(
        &mut self,
        key: &str,
    ) -> Option<&mut Entry<V>> {
        self.entries.iter_mut().find(|e| e.key == key)
    }

    /// Добавляет запись в конец цепочки. Уникальность ключа проверяет
    /// вызывающая сторона.
    pub(crate) fn push(
        &mut self,
        key: String,
        value: V,
    ) {
        self.entries.push(Entry { key, value });
    }

    /// Изымает запись с ключом `key`, сохраняя порядок остальных.
    pub(crate) fn remove(
        &mut self,
        key: &str,
    ) -> Option<Entry<V>> {
        let pos = self.entries.iter().position(|e| e.key == key)?;
        Some(self.entries.remove(pos))
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn entries(&self) -> &[Entry<V>] {
        &self.entries
    }

    pub(crate) fn into_entries(self) -> Vec<Entry<V>> {
        self.entries
    }
}

impl<V> Default for Bucket<V> {
    fn default() -> Self {
        Self::new()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
