//! Total Computation
//!
//! Bottom-up recomputation of every derived field. Runs once per accepted
//! submission; derived fields are stale in between.

use crate::domain::{Group, Material, Quotation, Task};

fn material_totals(material: &Material) -> Material {
    Material {
        total: material.quantity * material.rate,
        ..material.clone()
    }
}

fn task_totals(task: &Task) -> Task {
    let materials: Vec<Material> = task.materials.iter().map(material_totals).collect();
    let material_total = materials.iter().map(|m| m.total).sum::<f64>();
    let total = task.quantity * task.rate;
    Task {
        materials,
        total,
        material_total,
        task_total: total + material_total,
        ..task.clone()
    }
}

fn group_totals(group: &Group) -> Group {
    let tasks: Vec<Task> = group.tasks.iter().map(task_totals).collect();
    let net_total = tasks.iter().map(|t| t.task_total).sum::<f64>();
    Group {
        tasks,
        net_total,
        grand_total: net_total - group.discount,
        ..group.clone()
    }
}

/// Return a copy of the form with every derived total filled in
pub fn compute_totals(form: &Quotation) -> Quotation {
    Quotation {
        groups: form.groups.iter().map(group_totals).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn make_task(id: u32, quantity: f64, rate: f64, materials: &[(f64, f64)]) -> Task {
        let mut task = Task::new(id);
        task.quantity = quantity;
        task.rate = rate;
        task.materials = materials
            .iter()
            .enumerate()
            .map(|(i, (q, r))| {
                let mut m = Material::new(i as u32 + 1);
                m.quantity = *q;
                m.rate = *r;
                m
            })
            .collect();
        task
    }

    #[test]
    fn test_multi_task_group() {
        let mut group = Group::new(1);
        group.discount = 5.0;
        group.tasks = vec![
            make_task(1, 1.0, 10.0, &[(2.0, 3.0), (1.0, 4.0)]),
            make_task(2, 2.0, 2.5, &[(1.0, 1.0)]),
        ];
        let form = compute_totals(&Quotation { groups: vec![group] });
        let group = &form.groups[0];

        assert_eq!(group.tasks[0].material_total, 10.0);
        assert_eq!(group.tasks[0].task_total, 20.0);
        assert_eq!(group.tasks[1].task_total, 6.0);
        assert_eq!(group.net_total, 26.0);
        assert_eq!(group.grand_total, 21.0);
    }

    #[test]
    fn test_discount_can_exceed_net() {
        let mut group = Group::new(1);
        group.discount = 100.0;
        group.tasks = vec![make_task(1, 1.0, 1.0, &[(1.0, 1.0)])];
        let form = compute_totals(&Quotation { groups: vec![group] });
        assert_eq!(form.groups[0].grand_total, -98.0);
    }

    #[test]
    fn test_stale_totals_are_overwritten() {
        let mut form = Quotation::new();
        form.groups[0].net_total = 999.0;
        form.groups[0].tasks[0].task_total = 999.0;
        form.groups[0].tasks[0].materials[0].total = 999.0;
        let form = compute_totals(&form);
        assert_eq!(form.groups[0].net_total, 0.0);
        assert_eq!(form.groups[0].tasks[0].task_total, 0.0);
        assert_eq!(form.groups[0].tasks[0].materials[0].total, 0.0);
    }

    fn arb_task() -> impl Strategy<Value = Task> {
        (
            1u32..50,
            0.01f64..1_000.0,
            0.01f64..1_000.0,
            prop::collection::vec((0.01f64..1_000.0, 0.01f64..1_000.0), 1..5),
        )
            .prop_map(|(id, q, r, materials)| make_task(id, q, r, &materials))
    }

    fn arb_form() -> impl Strategy<Value = Quotation> {
        prop::collection::vec((0.0f64..500.0, prop::collection::vec(arb_task(), 1..4)), 1..4)
            .prop_map(|groups| Quotation {
                groups: groups
                    .into_iter()
                    .enumerate()
                    .map(|(i, (discount, tasks))| {
                        let mut group = Group::new(i as u32 + 1);
                        group.discount = discount;
                        group.tasks = tasks;
                        group
                    })
                    .collect(),
            })
    }

    proptest! {
        #[test]
        fn prop_totals_identities(form in arb_form()) {
            let out = compute_totals(&form);
            prop_assert_eq!(out.groups.len(), form.groups.len());
            for group in &out.groups {
                for task in &group.tasks {
                    for m in &task.materials {
                        prop_assert_eq!(m.total, m.quantity * m.rate);
                    }
                    let sum: f64 = task.materials.iter().map(|m| m.total).sum();
                    prop_assert_eq!(task.material_total, sum);
                    prop_assert_eq!(task.total, task.quantity * task.rate);
                    prop_assert_eq!(task.task_total, task.total + task.material_total);
                }
                let net: f64 = group.tasks.iter().map(|t| t.task_total).sum();
                prop_assert_eq!(group.net_total, net);
                prop_assert_eq!(group.grand_total, group.net_total - group.discount);
            }
        }

        #[test]
        fn prop_inputs_untouched(form in arb_form()) {
            let out = compute_totals(&form);
            for (a, b) in form.groups.iter().zip(&out.groups) {
                prop_assert_eq!(a.id, b.id);
                prop_assert_eq!(a.discount, b.discount);
                prop_assert_eq!(a.tasks.len(), b.tasks.len());
            }
        }
    }
}
