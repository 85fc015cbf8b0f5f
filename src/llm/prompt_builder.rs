use crate::llm::prompts;
use crate::locale::Locale;
use crate::style::Style;

/// Full prompt: style instructions, then locale instructions, then the diff.
pub fn compose(style: Style, locale: &Locale, diff: &str) -> String {
    let mut prompt = style_block(style);
    prompt.push_str(&locale_block(locale));
    prompt.push_str(diff);
    prompt
}

pub fn style_block(style: Style) -> String {
    match style {
        Style::Simple => String::new(),
        Style::Conventional => render_prefixes(prompts::CONVENTIONAL_PREFIXES),
        Style::Gitmoji => render_prefixes(prompts::GITMOJI_PREFIXES),
    }
}

pub fn locale_block(locale: &Locale) -> String {
    prompts::LOCALE_TEMPLATE.replace("{language}", &locale.display_name())
}

fn render_prefixes(catalog: &[(&str, &str)]) -> String {
    let mut out = String::from(prompts::PREFIX_HEADER);
    for (prefix, description) in catalog {
        out.push_str(&format!("- \"{prefix}\": {description}\n"));
    }
    out
}
