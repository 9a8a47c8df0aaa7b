use contactview_engine::{StatusLine, TableBody, ViewState};
use contactview_types::{ContactRecord, SortColumn};

use crate::presentation::view_models::{
    AliasCell, ColumnHeaderViewModel, CommandResultViewModel, ContactListViewModel,
    ContactRowViewModel, Guidance, PhoneCell, StatusBadge, StatusViewModel, TableBodyViewModel,
};

/// `tel:` target for a phone: the phone with every whitespace character removed.
pub fn tel_href(phone: &str) -> String {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{}", compact)
}

pub fn present_alias_cell(record: &ContactRecord) -> AliasCell {
    match record.usable_alias() {
        Some(alias) => AliasCell::Copyable {
            text: alias.to_string(),
        },
        None => AliasCell::Missing,
    }
}

pub fn present_phone_cell(record: &ContactRecord) -> PhoneCell {
    match record.usable_phone() {
        Some(phone) => PhoneCell::Link {
            text: phone.to_string(),
            href: tel_href(phone),
        },
        None => PhoneCell::Missing,
    }
}

pub fn present_row(record: &ContactRecord) -> ContactRowViewModel {
    ContactRowViewModel {
        alias: present_alias_cell(record),
        name: record.name_or_empty().to_string(),
        phone: present_phone_cell(record),
    }
}

pub fn present_columns(state: &ViewState) -> Vec<ColumnHeaderViewModel> {
    SortColumn::ALL
        .iter()
        .map(|&column| ColumnHeaderViewModel {
            column,
            label: column.label().to_string(),
            aria_sort: state.sort_indicator(column),
        })
        .collect()
}

pub fn present_body(state: &ViewState) -> TableBodyViewModel {
    match state.body() {
        TableBody::Loading => TableBodyViewModel::Loading,
        TableBody::Error(detail) => TableBodyViewModel::Error {
            detail: detail.to_string(),
        },
        TableBody::Empty => TableBodyViewModel::Empty,
        TableBody::Populated(records) => TableBodyViewModel::Populated {
            rows: records.iter().map(present_row).collect(),
        },
    }
}

pub fn present_status(state: &ViewState) -> StatusViewModel {
    match state.status() {
        StatusLine::Failed => StatusViewModel::Failed,
        StatusLine::Filtered { shown, total } => StatusViewModel::Filtered { shown, total },
        StatusLine::Total(total) => StatusViewModel::Total { total },
    }
}

/// Table data shared by the TUI and `list`.
pub fn present_table(state: &ViewState, source: &str) -> ContactListViewModel {
    ContactListViewModel {
        source: source.to_string(),
        query: state.query().to_string(),
        sort_column: state.sort_column(),
        sort_direction: state.sort_direction(),
        columns: present_columns(state),
        body: present_body(state),
        status: present_status(state),
    }
}

pub fn present_contact_list(
    state: &ViewState,
    source: &str,
) -> CommandResultViewModel<ContactListViewModel> {
    let content = present_table(state, source);

    match state.load_error() {
        Some(detail) => CommandResultViewModel::new(content)
            .with_badge(StatusBadge::error(format!(
                "Could not load {}: {}",
                source, detail
            )))
            .with_suggestion(
                Guidance::new("Point at another file or URL")
                    .with_command("contactview --data <PATH|URL> list"),
            )
            .with_suggestion(
                Guidance::new("Or store it as the default")
                    .with_command("contactview config set-data <PATH|URL>"),
            ),
        None => CommandResultViewModel::new(content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contactview_types::{AriaSort, LoadError, SortDirection};

    fn record(alias: Option<&str>, name: Option<&str>, phone: Option<&str>) -> ContactRecord {
        ContactRecord::new(alias, name, phone)
    }

    #[test]
    fn test_tel_href_strips_all_whitespace() {
        assert_eq!(tel_href("555 12 34"), "tel:5551234");
        assert_eq!(tel_href("+1\t(555)\n0100"), "tel:+1(555)0100");
        assert_eq!(tel_href("555-1234"), "tel:555-1234");
    }

    #[test]
    fn test_sentinel_and_absent_alias_render_missing() {
        assert_eq!(
            present_alias_cell(&record(Some("N/A"), None, None)),
            AliasCell::Missing
        );
        assert_eq!(
            present_alias_cell(&record(Some("n/a"), None, None)),
            AliasCell::Missing
        );
        assert_eq!(present_alias_cell(&record(None, None, None)), AliasCell::Missing);
        assert_eq!(
            present_alias_cell(&record(Some("Work"), None, None)),
            AliasCell::Copyable {
                text: "Work".to_string()
            }
        );
    }

    #[test]
    fn test_phone_cell_links_to_tel() {
        assert_eq!(
            present_phone_cell(&record(None, None, Some("555 1234"))),
            PhoneCell::Link {
                text: "555 1234".to_string(),
                href: "tel:5551234".to_string()
            }
        );
        assert_eq!(
            present_phone_cell(&record(None, None, Some("N/a"))),
            PhoneCell::Missing
        );
        assert_eq!(present_phone_cell(&record(None, None, None)), PhoneCell::Missing);
    }

    #[test]
    fn test_row_keeps_markup_as_text() {
        let row = present_row(&record(None, Some("<b>Bold</b>"), None));
        assert_eq!(row.name, "<b>Bold</b>");
    }

    #[test]
    fn test_columns_carry_aria_sort() {
        let state = ViewState::new().with_sort(SortColumn::Phone, SortDirection::Descending);
        let columns = present_columns(&state);

        let sorts: Vec<AriaSort> = columns.iter().map(|c| c.aria_sort).collect();
        assert_eq!(
            sorts,
            vec![AriaSort::None, AriaSort::None, AriaSort::Descending]
        );
        assert_eq!(columns[0].label, "Alias");
    }

    #[test]
    fn test_body_follows_state_precedence() {
        let mut state = ViewState::new();
        assert_eq!(present_body(&state), TableBodyViewModel::Loading);

        state.apply_load(Ok(vec![record(Some("Work"), Some("John"), None)]));
        assert!(matches!(
            present_body(&state),
            TableBodyViewModel::Populated { ref rows } if rows.len() == 1
        ));

        state.set_query("zzz");
        assert_eq!(present_body(&state), TableBodyViewModel::Empty);
        assert_eq!(
            present_status(&state),
            StatusViewModel::Filtered { shown: 0, total: 1 }
        );

        state.apply_load(Err(LoadError::Status(503)));
        assert!(matches!(present_body(&state), TableBodyViewModel::Error { .. }));
        assert_eq!(present_status(&state), StatusViewModel::Failed);
    }

    #[test]
    fn test_contact_list_failure_carries_error_badge() {
        let mut state = ViewState::new();
        state.apply_load(Err(LoadError::Status(404)));

        let result = present_contact_list(&state, "contacts.json");
        assert!(result.is_failure());
        assert!(!result.suggestions.is_empty());

        let mut state = ViewState::new();
        state.apply_load(Ok(vec![]));
        let result = present_contact_list(&state, "contacts.json");
        assert!(!result.is_failure());
        assert_eq!(result.content.status, StatusViewModel::Total { total: 0 });
    }
}
