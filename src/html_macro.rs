// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Kokic (@kokic)

/// Builds an element as a `String`.
///
/// ```text
/// html!(section class = "question", data_type = {kind} => (statement) "\n" {options})
/// ```
///
/// Attribute names are written with `_` and emitted with `-`. Attribute values
/// and children are single token trees rendered through `Display`. Nothing is
/// escaped here; callers escape user text before passing it in.
#[macro_export]
macro_rules! html {
    ($tag:ident $($attr:ident = $value:tt),* => $($child:tt)*) => {{
        #[allow(unused_mut)]
        let mut element = String::new();
        element.push('<');
        element.push_str(stringify!($tag));
        $(
            element.push(' ');
            element.push_str(&stringify!($attr).replace('_', "-"));
            element.push_str("=\"");
            element.push_str(&format!("{}", $value));
            element.push('"');
        )*
        element.push('>');
        $(
            element.push_str(&format!("{}", $child));
        )*
        element.push_str("</");
        element.push_str(stringify!($tag));
        element.push('>');
        element
    }};
}
