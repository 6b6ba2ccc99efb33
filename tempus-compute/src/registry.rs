//! Lookup of the builtin temporal functions by name.
//!
//! The table is built on first use and never mutated afterwards, so lookups
//! from concurrent query threads need no locking.

use std::sync::{Arc, OnceLock};

use rustc_hash::FxHashMap;

use crate::function::{TemporalFunction, TemporalScalarFunction};
use crate::transform::DateTransform;
use crate::transforms::{
    ToDate, ToDayOfMonth, ToDayOfWeek, ToHour, ToMinute, ToMonday, ToMonth, ToQuarter, ToSecond,
    ToStartOfDay, ToStartOfHour, ToStartOfMinute, ToStartOfMonth, ToStartOfQuarter, ToStartOfYear,
    ToYear,
};

type FunctionTable = FxHashMap<&'static str, Arc<dyn TemporalScalarFunction>>;

fn register<T: DateTransform>(table: &mut FunctionTable) {
    let previous = table.insert(T::NAME, Arc::new(TemporalFunction::<T>::new()));
    debug_assert!(previous.is_none(), "duplicate temporal function {}", T::NAME);
}

fn table() -> &'static FunctionTable {
    static TABLE: OnceLock<FunctionTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = FunctionTable::default();
        register::<ToYear>(&mut table);
        register::<ToQuarter>(&mut table);
        register::<ToMonth>(&mut table);
        register::<ToDayOfMonth>(&mut table);
        register::<ToDayOfWeek>(&mut table);
        register::<ToHour>(&mut table);
        register::<ToMinute>(&mut table);
        register::<ToSecond>(&mut table);
        register::<ToDate>(&mut table);
        register::<ToStartOfYear>(&mut table);
        register::<ToStartOfQuarter>(&mut table);
        register::<ToStartOfMonth>(&mut table);
        register::<ToMonday>(&mut table);
        register::<ToStartOfDay>(&mut table);
        register::<ToStartOfHour>(&mut table);
        register::<ToStartOfMinute>(&mut table);
        tracing::debug!(functions = table.len(), "registered builtin temporal functions");
        table
    })
}

/// The builtin function called `name`; names are case-sensitive.
pub fn builtin_function(name: &str) -> Option<Arc<dyn TemporalScalarFunction>> {
    table().get(name).cloned()
}

/// Names of every builtin function, sorted.
pub fn builtin_function_names() -> Vec<&'static str> {
    let mut names: Vec<_> = table().keys().copied().collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_name_resolves_to_itself() {
        let names = builtin_function_names();
        assert_eq!(names.len(), 16);
        for name in names {
            let function = builtin_function(name).unwrap();
            assert_eq!(function.name(), name);
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(builtin_function("toYear").is_some());
        assert!(builtin_function("TOYEAR").is_none());
        assert!(builtin_function("toCentury").is_none());
    }

    #[test]
    fn lookups_share_one_instance() {
        let a = builtin_function("toMonth").unwrap();
        let b = builtin_function("toMonth").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
