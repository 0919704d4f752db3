// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Spore (@s-cerevisiae)

use camino::{Utf8Path, Utf8PathBuf};

pub fn split_file_name(path: &Utf8Path) -> Option<(&Utf8Path, &str)> {
    let mut components = path.components();
    let name = components.next_back();
    let base = components.as_path();
    Some((base, name?.as_str()))
}

/// `questions/algebra/q1.toml` under `questions` becomes `algebra/q1.html`.
pub fn html_output_path(input_root: &Utf8Path, input: &Utf8Path) -> Utf8PathBuf {
    let relative = match input.strip_prefix(input_root) {
        Ok(relative) if relative.file_name().is_some() => relative,
        _ => input.file_name().map_or(input, Utf8Path::new),
    };
    relative.with_extension("html")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_base() {
        assert_eq!(split_file_name("a/b".into()), Some(("a".into(), "b")));
        assert_eq!(split_file_name("a/b/c".into()), Some(("a/b".into(), "c")));
        assert_eq!(split_file_name("/".into()), Some(("".into(), "/")));
        assert_eq!(split_file_name("a".into()), Some(("".into(), "a")));
    }

    #[test]
    fn test_html_output_path() {
        assert_eq!(
            html_output_path("questions".into(), "questions/algebra/q1.toml".into()),
            Utf8PathBuf::from("algebra/q1.html")
        );
        assert_eq!(
            html_output_path("a/q.json".into(), "a/q.json".into()),
            Utf8PathBuf::from("q.html")
        );
        assert_eq!(
            html_output_path("".into(), "q.json".into()),
            Utf8PathBuf::from("q.html")
        );
    }
}
