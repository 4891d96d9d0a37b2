//! Totals Summary Component
//!
//! Computed totals of the last accepted submission, per group and task, plus
//! the raw JSON handed to the submission sink.

use leptos::prelude::*;

use quotation_core::{FormSettings, Group, Quotation};

use crate::store::{use_form_store, FormStateStoreFields};

/// Pretty JSON of the submitted quotation; failures are logged and shown inline
fn submitted_json(quotation: &Quotation) -> String {
    serde_json::to_string_pretty(quotation).unwrap_or_else(|e| {
        leptos::logging::error!("[FORM] Failed to render submitted data: {}", e);
        format!("(unavailable: {})", e)
    })
}

fn group_summary(group: Group, settings: &FormSettings) -> impl IntoView {
    let tasks = group
        .tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let label = if task.name.is_empty() { format!("Task {}", i + 1) } else { task.name.clone() };
            view! {
                <tr>
                    <td>{label}</td>
                    <td class="amount">{settings.format_amount(task.total)}</td>
                    <td class="amount">{settings.format_amount(task.material_total)}</td>
                    <td class="amount">{settings.format_amount(task.task_total)}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="group-summary">
            <h3>{group.name.clone()}</h3>
            <table class="totals-table">
                <thead>
                    <tr>
                        <th>"Task"</th>
                        <th>"Labour"</th>
                        <th>"Materials"</th>
                        <th>"Task Total"</th>
                    </tr>
                </thead>
                <tbody>{tasks}</tbody>
            </table>
            <dl class="group-totals">
                <dt>"Net Total"</dt>
                <dd>{settings.format_amount(group.net_total)}</dd>
                <dt>"Discount"</dt>
                <dd>{settings.format_amount(group.discount)}</dd>
                <dt>"Grand Total"</dt>
                <dd class="grand-total">{settings.format_amount(group.grand_total)}</dd>
            </dl>
        </div>
    }
}

#[component]
pub fn TotalsSummary() -> impl IntoView {
    let store = use_form_store();
    let settings = expect_context::<FormSettings>();

    view! {
        {move || store.submitted().get().map(|quotation| {
            let json = submitted_json(&quotation);
            let groups = quotation
                .groups
                .into_iter()
                .map(|group| group_summary(group, &settings))
                .collect_view();
            view! {
                <section class="totals-summary">
                    <h2>"Quotation Totals"</h2>
                    {groups}
                    <details class="submitted-json">
                        <summary>"Submitted data"</summary>
                        <pre>{json}</pre>
                    </details>
                </section>
            }
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submitted_json_uses_wire_names() {
        let json = submitted_json(&quotation_core::totals::compute_totals(&Quotation::new()));
        assert!(json.contains("\"grandTotal\""));
        assert!(json.contains("\"materialTotal\""));
    }
}
