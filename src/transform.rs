use once_cell::sync::Lazy;
use regex::Regex;

/// Svelte 5 preamble prepended to every rewritten component. Declares the
/// explicit props the old convention forwarded implicitly via `$$restProps`.
const SCRIPT_BLOCK: &str = r#"<script lang="ts">
  interface Props {
    size?: number;
    color?: string;
    class?: string;
  }

  let { size = 24, color = 'currentColor', class: className, ...rest }: Props & Record<string, any> = $props();
</script>"#;

/// Matches the component's `<svg>` block. `(?s)` lets the inner content span
/// newlines. The greedy `.*` is load-bearing: the span runs from the first
/// `<svg` to the *last* `</svg>` in the file. Inputs with nested or sibling
/// `<svg>` blocks are merged into one extraction; a non-greedy match would
/// change that behavior.
static SVG_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<svg([^>]+)>(.*)</svg>").unwrap());

static REST_PROPS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\{\.\.\.\$\$restProps\}").unwrap());

static SLOT_PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"<slot />").unwrap());

/// Strips every `{...$$restProps}` spread and `<slot />` placeholder from an
/// attribute list, then trims the result. Idempotent.
pub fn clean_attributes(attrs: &str) -> String {
    let attrs = REST_PROPS.replace_all(attrs, "");
    let attrs = SLOT_PLACEHOLDER.replace_all(&attrs, "");
    attrs.trim().to_string()
}

/// Rewrites one component body to the Svelte 5 convention.
///
/// Returns `None` when no `<svg>` block is recognized; the caller keeps the
/// original content untouched. That is a defined pass-through outcome, not an
/// error: malformed input simply fails the match.
pub fn migrate_component(content: &str) -> Option<String> {
    let captures = SVG_BLOCK.captures(content)?;
    let attrs = captures.get(1).unwrap().as_str();
    let inner = captures.get(2).unwrap().as_str();

    let cleaned = clean_attributes(attrs);

    Some(format!(
        "{preamble}\n\n<svg\n  width={{size}}\n  height={{size}}\n  style=\"color: {{color}}\"\n  class={{className}}\n  {attrs}\n  {{...rest}}\n>\n  {inner}\n</svg>",
        preamble = SCRIPT_BLOCK,
        attrs = cleaned,
        inner = inner,
    ))
}
