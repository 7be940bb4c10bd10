use super::error::QueryError;
use std::fmt;
use std::str::FromStr;

macro_rules! query_kind {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every accepted name, in declaration order.
            pub const NAMES: &'static [&'static str] = &[$($text),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = QueryError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    _ => Err(QueryError::invalid_kind(s, Self::NAMES)),
                }
            }
        }
    };
}

query_kind! {
    /// Header field selector for [`get_information`](crate::ParsedMolecule::get_information).
    HeaderKind {
        #[default]
        Name => "name",
        /// The five declared counts.
        General => "general",
        Type => "type",
        Charge => "charge",
        StatusBits => "status_bits",
        Comment => "comment",
    }
}

query_kind! {
    /// Atom field selector for [`get_molecule`](crate::ParsedMolecule::get_molecule).
    AtomField {
        #[default]
        AtomName => "atom_name",
        Coords => "coords",
        AtomType => "atom_type",
        SubsetId => "subset_id",
        SubsetName => "subset_name",
        Charge => "charge",
    }
}

query_kind! {
    /// Bond grouping selector for [`get_bond`](crate::ParsedMolecule::get_bond).
    BondField {
        #[default]
        AtomsBond => "atoms_bond",
        BondsType => "bonds_type",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_common_queries() {
        assert_eq!(HeaderKind::default(), HeaderKind::Name);
        assert_eq!(AtomField::default(), AtomField::AtomName);
        assert_eq!(BondField::default(), BondField::AtomsBond);
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for name in HeaderKind::NAMES {
            assert_eq!(name.parse::<HeaderKind>().unwrap().as_str(), *name);
        }
        for name in AtomField::NAMES {
            assert_eq!(name.parse::<AtomField>().unwrap().to_string(), *name);
        }
        for name in BondField::NAMES {
            assert_eq!(name.parse::<BondField>().unwrap().as_str(), *name);
        }
    }

    #[test]
    fn unknown_names_are_invalid_kinds() {
        let err = "Name".parse::<HeaderKind>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid query kind 'Name' (expected one of: name, general, type, charge, status_bits, comment)"
        );
        assert!(matches!(
            "element".parse::<AtomField>(),
            Err(QueryError::InvalidQueryKind { .. })
        ));
        assert!(matches!(
            "".parse::<BondField>(),
            Err(QueryError::InvalidQueryKind { .. })
        ));
    }
}
