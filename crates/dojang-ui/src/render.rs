use dojang_lang_korean::BeltRank;
use dojang_types::TermRow;

/// Render result rows as an aligned table, clipped to `width` columns.
pub fn render_results(rows: &[TermRow], width: u16) -> String {
    if rows.is_empty() {
        return "No matching terms.".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:<4} {:<22} {:<12} {:<24} {:<20} {:<10}\n",
        "#", "English", "Korean", "Romanized", "Belt", "Category"
    ));

    for (i, row) in rows.iter().enumerate() {
        let belt = BeltRank::from_str(&row.belt_learnt)
            .map(|b| b.description())
            .unwrap_or(row.belt_learnt.as_str());

        let line = format!(
            "{:<4} {:<22} {:<12} {:<24} {:<20} {:<10}  {}",
            i + 1,
            row.english_name,
            row.korean_name,
            row.romanized,
            belt,
            row.category,
            row.meaning,
        );
        out.push_str(&clip(&line, width as usize));
        out.push('\n');
    }

    out.push_str(&format!("{} term(s)", rows.len()));
    out
}

pub fn render_categories(categories: &[String]) -> String {
    let mut out = String::from("Categories: all");
    for category in categories {
        out.push_str(", ");
        out.push_str(category);
    }
    out
}

fn clip(line: &str, width: usize) -> String {
    if line.chars().count() <= width {
        return line.to_string();
    }
    let mut clipped: String = line.chars().take(width.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}
