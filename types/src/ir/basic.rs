//! Predeclared (basic) types.
//!
//! A `Primitive` names one of the predeclared types of the rendered syntax,
//! including the untyped constant kinds and the `invalid` sentinel a front-end
//! produces for types it could not resolve.

/// Predeclared type kinds.
///
/// `Byte` and `Rune` are kept distinct from `Uint8` and `Int32` so a provider
/// can preserve the spelling the programmer wrote.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Primitive {
    /// Placeholder for a type that failed to resolve.
    Invalid,

    Bool,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uintptr,
    Float32,
    Float64,
    Complex64,
    Complex128,
    String,

    /// `unsafe.Pointer`
    UnsafePointer,

    Byte,
    Rune,

    // Types of untyped constants.
    UntypedBool,
    UntypedInt,
    UntypedRune,
    UntypedFloat,
    UntypedComplex,
    UntypedString,
    UntypedNil,
}

impl Primitive {
    /// Canonical name of the primitive.
    ///
    /// For `UnsafePointer` this is the unqualified `Pointer`; the package
    /// prefix is added by whoever prints it.
    pub fn name(&self) -> &'static str {
        match self {
            Primitive::Invalid => "invalid type",
            Primitive::Bool => "bool",
            Primitive::Int => "int",
            Primitive::Int8 => "int8",
            Primitive::Int16 => "int16",
            Primitive::Int32 => "int32",
            Primitive::Int64 => "int64",
            Primitive::Uint => "uint",
            Primitive::Uint8 => "uint8",
            Primitive::Uint16 => "uint16",
            Primitive::Uint32 => "uint32",
            Primitive::Uint64 => "uint64",
            Primitive::Uintptr => "uintptr",
            Primitive::Float32 => "float32",
            Primitive::Float64 => "float64",
            Primitive::Complex64 => "complex64",
            Primitive::Complex128 => "complex128",
            Primitive::String => "string",
            Primitive::UnsafePointer => "Pointer",
            Primitive::Byte => "byte",
            Primitive::Rune => "rune",
            Primitive::UntypedBool => "untyped bool",
            Primitive::UntypedInt => "untyped int",
            Primitive::UntypedRune => "untyped rune",
            Primitive::UntypedFloat => "untyped float",
            Primitive::UntypedComplex => "untyped complex",
            Primitive::UntypedString => "untyped string",
            Primitive::UntypedNil => "untyped nil",
        }
    }

    /// Returns true for the `invalid` sentinel.
    pub fn is_invalid(&self) -> bool {
        matches!(self, Primitive::Invalid)
    }

    /// Returns true for the (typed) string primitive.
    pub fn is_string(&self) -> bool {
        matches!(self, Primitive::String)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(Primitive::Int.name(), "int");
        assert_eq!(Primitive::Complex128.name(), "complex128");
        assert_eq!(Primitive::UnsafePointer.name(), "Pointer");
        assert_eq!(Primitive::UntypedNil.name(), "untyped nil");
        assert_eq!(Primitive::Invalid.name(), "invalid type");
    }

    #[test]
    fn test_predicates() {
        assert!(Primitive::Invalid.is_invalid());
        assert!(Primitive::String.is_string());
        assert!(!Primitive::UntypedString.is_string());
    }
}
