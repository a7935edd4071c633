use colored::Colorize;
use machcat_core::{
    block_plain_text, group_items_by_dimension, sorted_group_names, CatalogItem, CatalogView,
    Dimension, FacetLists, InquiryKind, SelectionState, UNSPECIFIED_GROUP,
};

/// Format the filter sidebar: one panel per dimension, options only when expanded
pub fn format_facet_panels(facets: &FacetLists, selection: &SelectionState) -> String {
    let mut lines = Vec::new();

    for dimension in Dimension::ALL {
        let options = facets.get(dimension);
        let expanded = selection.is_expanded(dimension);
        let marker = if expanded { "▾" } else { "▸" };
        let selected_count = selection.selected(dimension).len();

        let mut header = format!(
            "{} {} ({})",
            marker,
            dimension.title().to_uppercase().bold(),
            options.len()
        );
        if selected_count > 0 {
            header.push_str(&format!(" {}", format!("{} selected", selected_count).cyan()));
        }
        lines.push(header);

        if !expanded {
            continue;
        }

        if options.is_empty() {
            lines.push(format!("    {}", "No options in this dimension".dimmed()));
        }

        for option in options {
            let checked = selection.is_selected(dimension, &option.id);
            let checkbox = if checked { "[x]".green() } else { "[ ]".normal() };
            let label = if option.label.is_empty() { "—" } else { option.label.as_str() };
            lines.push(format!(
                "    {} {} {}",
                checkbox,
                label,
                format!("({})", option.id).dimmed()
            ));
        }
    }

    lines.join("\n")
}

/// Format the active selection, e.g. "Sectors: Shoes OR Bags; Brands: Pfaff"
/// Selected ids that are no longer offered are shown as-is
pub fn format_active_filters(facets: &FacetLists, selection: &SelectionState) -> String {
    let mut filter_parts = Vec::new();

    for dimension in Dimension::ALL {
        let selected = selection.selected(dimension);
        if selected.is_empty() {
            continue;
        }

        let options = facets.get(dimension);
        let labels: Vec<&str> = selected
            .iter()
            .map(|id| {
                options
                    .iter()
                    .find(|option| &option.id == id)
                    .map(|option| option.label.as_str())
                    .unwrap_or(id.as_str())
            })
            .collect();
        filter_parts.push(format!("{}: {}", dimension.title(), labels.join(" OR ")));
    }

    filter_parts.join("; ")
}

/// Format one result card
pub fn format_item(item: &CatalogItem, locale: &str) -> String {
    let mut lines = vec![format!("■ {}", item.display_name(locale).bold())];

    if !item.model_code.is_empty() {
        lines.push(format!("  Model: {}", item.model_code));
    }

    let brand = item.brand_label(locale);
    if !brand.is_empty() {
        lines.push(format!("  Brand: {}", brand));
    }

    for dimension in [Dimension::ProductType, Dimension::Sector, Dimension::Category] {
        let labels: Vec<String> = item
            .terms(dimension)
            .iter()
            .map(|term| term.resolved_label(locale))
            .filter(|label| !label.is_empty())
            .collect();
        if !labels.is_empty() {
            lines.push(format!("  {}: {}", dimension.title(), labels.join(", ")));
        }
    }

    let description = block_plain_text(&item.description_blocks(locale));
    if let Some(first_paragraph) = description.split("\n\n").next().filter(|p| !p.is_empty()) {
        lines.push(format!("  {}", first_paragraph.italic()));
    }

    if let Some(slug) = &item.slug {
        lines.push(format!(
            "  {} {}",
            format!("slug: {}", slug).dimmed(),
            format!("· {}", InquiryKind::for_item(item).translation_key()).dimmed()
        ));
    }

    lines.join("\n")
}

/// Format the result grid
pub fn format_results(view: &CatalogView, locale: &str) -> String {
    let mut out = format!("Total results: {}\n", view.total_results().to_string().bold());

    if view.results.is_empty() {
        out.push_str(&format!("\n{}\n", "No results found.".dimmed()));
        return out;
    }

    for item in &view.results {
        out.push('\n');
        out.push_str(&format_item(item, locale));
        out.push('\n');
    }

    out
}

/// Format results in groups of one dimension's labels
pub fn format_grouped_results(items: &[CatalogItem], dimension: Dimension, locale: &str) -> String {
    let groups = group_items_by_dimension(items, dimension, locale);
    let mut out = String::new();

    for group_name in sorted_group_names(&groups) {
        if let Some(group_items) = groups.get(&group_name) {
            let heading = if group_name == UNSPECIFIED_GROUP {
                "Unspecified"
            } else {
                group_name.as_str()
            };
            out.push_str(&format!(
                "\n## {}: {} ({})\n",
                dimension.title(),
                heading.bold(),
                group_items.len()
            ));

            for item in group_items {
                out.push('\n');
                out.push_str(&format_item(item, locale));
                out.push('\n');
            }
        }
    }

    out
}
