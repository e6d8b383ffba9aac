/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

macro_rules! obj_from_endpoint {
    ( $s:expr, $method:expr, $endpoint:expr, $opts:expr, $rt:ty ) => {{
        let value = $s
            .endpoint($method, &$endpoint, $opts)?
            .json::<serde_json::Value>()?;
        <$rt as crate::v1::WireModel>::from_wire(value)
    }};
}

macro_rules! objs_from_endpoint {
    ( $s:expr, $method:expr, $endpoint:expr, $opts:expr, $rt:ty ) => {{
        $s.endpoint($method, &$endpoint, $opts)?
            .json::<Vec<serde_json::Value>>()?
            .into_iter()
            .map(<$rt as crate::v1::WireModel>::from_wire)
            .collect::<Result<Vec<$rt>, crate::v1::PhotoprismError>>()
    }};
}

// Lets a model be passed wherever a Reference is expected
macro_rules! impl_reference {
    ( $($t:ty),+ ) => {
        $(
            impl crate::v1::HasUid for $t {
                fn uid(&self) -> &str {
                    &self.uid
                }
            }

            impl<'a> From<&'a $t> for crate::v1::Reference<'a> {
                fn from(model: &'a $t) -> Self {
                    crate::v1::Reference::Handle(model)
                }
            }
        )+
    };
}

pub(crate) use {impl_reference, obj_from_endpoint, objs_from_endpoint};
