//! Type names and their C++ spelling.

use rustc_hash::FxHashMap;

/// Built-in type names and the C++ types they map to.
pub const PRIMITIVES: [(&str, &str); 16] = [
    ("int", "int"),
    ("i8", "int8_t"),
    ("i16", "int16_t"),
    ("i32", "int32_t"),
    ("i64", "int64_t"),
    ("u8", "uint8_t"),
    ("u16", "uint16_t"),
    ("u32", "uint32_t"),
    ("u64", "uint64_t"),
    ("byte", "uint8_t"),
    ("bool", "bool"),
    ("float", "float"),
    ("double", "double"),
    ("f32", "float"),
    ("f64", "double"),
    ("string", "std::string"),
];

/// Registered type names, mapped to the text emitted for them.
///
/// Structs map to their own name.
pub(crate) struct TypeTable<'ast> {
    names: FxHashMap<&'ast str, &'ast str>,
}

impl<'ast> TypeTable<'ast> {
    pub(crate) fn with_primitives() -> Self {
        TypeTable {
            names: PRIMITIVES.iter().copied().collect(),
        }
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    pub(crate) fn canonical(&self, name: &str) -> Option<&'ast str> {
        self.names.get(name).copied()
    }

    /// Register a struct name. Returns `false` if the name was taken.
    pub(crate) fn register_struct(&mut self, name: &'ast str) -> bool {
        if self.names.contains_key(name) {
            return false;
        }
        self.names.insert(name, name);
        true
    }
}
