//! Bindings for the `enums` namespace.

use jsonbind_core::record::{insert, insert_optional, optional, required};
use jsonbind_core::{string_enum, ConvertError, Map, Record, Value};

string_enum! {
    /// Values of the `type` field on [`EnumType`] and [`OptionalEnumType`].
    pub enum Type {
        One => "one",
        Two => "two",
        Three => "three",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    pub kind: Type,
}

impl Record for EnumType {
    const NAME: &'static str = "EnumType";

    fn populate(dict: &Map<String, Value>) -> Result<Self, ConvertError> {
        Ok(EnumType {
            kind: required(dict, "type")?,
        })
    }

    fn to_dict(&self) -> Map<String, Value> {
        let mut dict = Map::new();
        insert(&mut dict, "type", &self.kind);
        dict
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OptionalEnumType {
    pub kind: Option<Type>,
}

impl Record for OptionalEnumType {
    const NAME: &'static str = "OptionalEnumType";

    fn populate(dict: &Map<String, Value>) -> Result<Self, ConvertError> {
        Ok(OptionalEnumType {
            kind: optional(dict, "type")?,
        })
    }

    fn to_dict(&self) -> Map<String, Value> {
        let mut dict = Map::new();
        insert_optional(&mut dict, "type", &self.kind);
        dict
    }
}

string_enum! {
    /// Parameter enum shared by the `takes*Enum*` functions.
    pub enum State {
        Foo => "foo",
        Bar => "bar",
        Baz => "baz",
    }
}

// ── Functions ───────────────────────────────────────────────────────

/// `takesEnum(State state)`
pub mod takes_enum {
    use super::State;
    use jsonbind_core::{call, Args, ConvertError};

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Params {
        pub state: State,
    }

    impl call::Params for Params {
        const FUNCTION: &'static str = "enums.takesEnum";
        const MAX_ARITY: usize = 1;

        fn from_args(args: &mut Args<'_>) -> Result<Self, ConvertError> {
            Ok(Params {
                state: args.required("state")?,
            })
        }
    }
}

/// `takesOptionalEnum(optional State state)`
pub mod takes_optional_enum {
    use super::State;
    use jsonbind_core::{call, Args, ConvertError};

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Params {
        pub state: Option<State>,
    }

    impl call::Params for Params {
        const FUNCTION: &'static str = "enums.takesOptionalEnum";
        const MAX_ARITY: usize = 1;

        fn from_args(args: &mut Args<'_>) -> Result<Self, ConvertError> {
            Ok(Params {
                state: args.optional("state")?,
            })
        }
    }
}

/// `takesMultipleOptionalEnums(optional State state, optional Type type)`
pub mod takes_multiple_optional_enums {
    use super::State;
    use jsonbind_core::{call, string_enum, Args, ConvertError};

    string_enum! {
        pub enum Type {
            Foo => "foo",
            Ding => "ding",
            Dong => "dong",
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Params {
        pub state: Option<State>,
        pub kind: Option<Type>,
    }

    impl call::Params for Params {
        const FUNCTION: &'static str = "enums.takesMultipleOptionalEnums";
        const MAX_ARITY: usize = 2;

        fn from_args(args: &mut Args<'_>) -> Result<Self, ConvertError> {
            Ok(Params {
                state: args.optional("state")?,
                kind: args.optional("type")?,
            })
        }
    }
}

/// `returnsEnum()` returning `State`
pub mod returns_enum {
    pub mod result {
        use crate::enums::State;
        use jsonbind_core::{call, Value};

        pub fn create(state: State) -> Value {
            call::result(&state)
        }
    }
}
