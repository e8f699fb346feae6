pub mod random;

/// Implement `KeyedEntry` for a struct by naming the field holding its key.
///
/// ```
/// use entry_lookup::{keyed_entry, KeyedEntry};
///
/// struct Account {
///     id: u64,
///     owner: String,
/// }
///
/// keyed_entry!(Account => id: u64);
///
/// let account = Account { id: 7, owner: "kim".to_string() };
/// assert_eq!(*account.key(), 7);
/// ```
#[macro_export]
macro_rules! keyed_entry {
    ($entry:ty => $field:ident: $key:ty) => {
        impl $crate::lookup::KeyedEntry<$key> for $entry {
            fn key(&self) -> &$key {
                &self.$field
            }
        }
    };
}
