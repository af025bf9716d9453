//! Invocation name resolution.
//!
//! [`classify`] decides what a raw invocation name denotes: a registered
//! independent command, a `group/action` pair, or nothing. Registered
//! commands are checked against the raw name *before* any splitting, so a
//! command named `home/index` - were the grammar ever to allow one - or a
//! plain `deploy` always shadows the controller interpretation.

use crate::registry::Registry;

/// What a raw invocation name resolved to. Consumed once per dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchTarget {
    /// A directly registered command, matched before any split.
    Command(String),
    /// A controller group and the action to run (`""` = default action).
    ControllerAction { group: String, action: String },
    /// Nothing matched; `probed` is the group name that was looked up,
    /// used for reporting and suggestions.
    NotFound { probed: String },
}

/// Classifies a raw invocation name against the registry.
pub fn classify(registry: &Registry, raw: &str, delimiter: char) -> DispatchTarget {
    if registry.is_command(raw) {
        return DispatchTarget::Command(raw.to_string());
    }

    let (group, action) = split_group_action(raw, delimiter);
    if registry.is_controller(&group) {
        DispatchTarget::ControllerAction { group, action }
    } else {
        DispatchTarget::NotFound { probed: group }
    }
}

/// Splits a raw name into `(group, action)` on the delimiter.
///
/// Splitting only happens when the first delimiter occurrence is past
/// position zero; a leading delimiter disables it entirely and the whole
/// name becomes the group. Empty segments are discarded. When more than two
/// segments remain, the final two become the pair and the leading segments
/// are silently dropped - historical behavior kept for compatibility, and
/// kept in this one function so changing it stays a one-line edit.
pub fn split_group_action(raw: &str, delimiter: char) -> (String, String) {
    let splittable = raw.find(delimiter).map_or(false, |pos| pos > 0);
    if !splittable {
        return (raw.to_string(), String::new());
    }

    let segments: Vec<&str> = raw.split(delimiter).filter(|s| !s.is_empty()).collect();
    match segments.len() {
        0 => (raw.to_string(), String::new()),
        1 => (segments[0].to_string(), String::new()),
        n => (segments[n - 2].to_string(), segments[n - 1].to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{
        Controller, ControllerRef, ExitStatus, HandlerRef, STATUS_OK,
    };
    use crate::context::{Input, Output};
    use anyhow::Result;

    #[derive(Default)]
    struct NullController;

    impl Controller for NullController {
        fn declared_name() -> &'static str {
            "null"
        }

        fn run(
            &mut self,
            _action: &str,
            _input: &mut Input,
            _output: &mut Output,
        ) -> Result<ExitStatus> {
            Ok(STATUS_OK)
        }
    }

    fn registry_with(commands: &[&str], controllers: &[&str]) -> Registry {
        let mut registry = Registry::new();
        for name in commands {
            registry
                .register_command(name, HandlerRef::from_simple_fn(|| Ok(STATUS_OK)), None)
                .unwrap();
        }
        for name in controllers {
            registry
                .register_controller(name, ControllerRef::of::<NullController>(), None)
                .unwrap();
        }
        registry
    }

    #[test]
    fn test_command_wins_over_controller() {
        let registry = registry_with(&["deploy"], &["deploy"]);
        assert_eq!(
            classify(&registry, "deploy", '/'),
            DispatchTarget::Command("deploy".into())
        );
    }

    #[test]
    fn test_group_action_pair() {
        let registry = registry_with(&[], &["home"]);
        assert_eq!(
            classify(&registry, "home/index", '/'),
            DispatchTarget::ControllerAction {
                group: "home".into(),
                action: "index".into(),
            }
        );
    }

    #[test]
    fn test_bare_group_gets_empty_action() {
        let registry = registry_with(&[], &["home"]);
        assert_eq!(
            classify(&registry, "home", '/'),
            DispatchTarget::ControllerAction {
                group: "home".into(),
                action: String::new(),
            }
        );
    }

    #[test]
    fn test_three_segments_drop_the_leading_one() {
        let registry = registry_with(&[], &["b"]);
        assert_eq!(
            classify(&registry, "a/b/c", '/'),
            DispatchTarget::ControllerAction {
                group: "b".into(),
                action: "c".into(),
            }
        );
    }

    #[test]
    fn test_unknown_name_reports_probed_group() {
        let registry = registry_with(&[], &[]);
        assert_eq!(
            classify(&registry, "ghost/act", '/'),
            DispatchTarget::NotFound {
                probed: "ghost".into()
            }
        );
    }

    #[test]
    fn test_custom_delimiter() {
        let registry = registry_with(&[], &["db"]);
        assert_eq!(
            classify(&registry, "db:migrate", ':'),
            DispatchTarget::ControllerAction {
                group: "db".into(),
                action: "migrate".into(),
            }
        );
    }

    #[test]
    fn test_split_plain_name() {
        assert_eq!(split_group_action("home", '/'), ("home".into(), "".into()));
    }

    #[test]
    fn test_split_pair() {
        assert_eq!(
            split_group_action("home/index", '/'),
            ("home".into(), "index".into())
        );
    }

    #[test]
    fn test_split_leading_delimiter_is_ignored() {
        assert_eq!(
            split_group_action("/home/index", '/'),
            ("/home/index".into(), "".into())
        );
    }

    #[test]
    fn test_split_trailing_delimiter() {
        assert_eq!(split_group_action("home/", '/'), ("home".into(), "".into()));
    }

    #[test]
    fn test_split_collapses_doubled_delimiters() {
        assert_eq!(
            split_group_action("home//index", '/'),
            ("home".into(), "index".into())
        );
    }

    #[test]
    fn test_split_three_segments() {
        assert_eq!(
            split_group_action("a/b/c", '/'),
            ("b".into(), "c".into())
        );
    }

    #[test]
    fn test_split_four_segments() {
        assert_eq!(
            split_group_action("a/b/c/d", '/'),
            ("c".into(), "d".into())
        );
    }
}
