//! Example validation and filtering applied at initialization time.

use tracing::warn;

use crate::example::Example;

/// Validation/filter collaborator applied once when the sequencer snapshots
/// its registered examples.
pub trait ExampleFilter: Send + Sync {
    /// Return the examples that survive validation for the given target.
    fn apply(&self, examples: Vec<Example>, target: Option<&str>) -> Vec<Example>;
}

/// Default validation rules.
///
/// Drops entries with an empty component or variant name, and applies the
/// target restriction declared on descriptor render specs: an entry is kept
/// when it declares no targets or includes the requested one.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFilter;

impl ExampleFilter for DefaultFilter {
    fn apply(&self, examples: Vec<Example>, target: Option<&str>) -> Vec<Example> {
        examples
            .into_iter()
            .filter(|example| {
                if example.component.trim().is_empty() || example.variant.trim().is_empty() {
                    warn!(
                        "Dropping invalid example from {}: component={:?}, variant={:?}",
                        example.file_name, example.component, example.variant
                    );
                    return false;
                }
                if let Some(target) = target {
                    let targets = example.render.targets();
                    if !targets.is_empty() && !targets.iter().any(|t| t == target) {
                        return false;
                    }
                }
                true
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderSpec;

    fn example(component: &str, variant: &str, targets: Vec<String>) -> Example {
        let render = if targets.is_empty() {
            RenderSpec::markup("<p>x</p>")
        } else {
            RenderSpec::descriptor(
                |_ctx| Ok(crate::render::RenderReturn::Mounted),
                vec![],
                targets,
            )
        };
        Example {
            file_name: "/src/fixture.js".to_string(),
            component: component.to_string(),
            variant: variant.to_string(),
            render,
        }
    }

    #[test]
    fn test_keeps_valid_examples() {
        let kept = DefaultFilter.apply(vec![example("Button", "default", vec![])], None);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_drops_empty_component() {
        let kept = DefaultFilter.apply(vec![example("", "default", vec![])], None);
        assert!(kept.is_empty());
    }

    #[test]
    fn test_drops_empty_variant() {
        let kept = DefaultFilter.apply(vec![example("Button", "  ", vec![])], None);
        assert!(kept.is_empty());
    }

    #[test]
    fn test_target_restriction() {
        let examples = vec![
            example("Button", "default", vec![]),
            example("Button", "chrome-only", vec!["chrome".to_string()]),
            example("Button", "firefox-only", vec!["firefox".to_string()]),
        ];
        let kept = DefaultFilter.apply(examples, Some("chrome"));
        let variants: Vec<&str> = kept.iter().map(|e| e.variant.as_str()).collect();
        assert_eq!(variants, ["default", "chrome-only"]);
    }

    #[test]
    fn test_no_target_keeps_restricted_examples() {
        let examples = vec![example("Button", "chrome-only", vec!["chrome".to_string()])];
        let kept = DefaultFilter.apply(examples, None);
        assert_eq!(kept.len(), 1);
    }
}
