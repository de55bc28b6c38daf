//! Composition validation
//!
//! Composite products declare per-kind caps in `regras_composicao`
//! ("max_base", "max_proteina", "max_guarnicao"). Selections are component
//! names; every selection must resolve to an active catalog component and a
//! composite item must stay within its product's caps.

use std::collections::HashMap;

use crate::db::models::{Component, ComponentKind, LineItem, Product, ProductKind};
use shared::{AppError, AppResult, ErrorCode};

/// Map a composition rule key to the component kind it constrains
fn rule_kind(key: &str) -> Option<ComponentKind> {
    match key {
        "max_base" => Some(ComponentKind::Base),
        "max_proteina" => Some(ComponentKind::Protein),
        "max_guarnicao" => Some(ComponentKind::Side),
        _ => None,
    }
}

/// Validate every line item of an order creation request
///
/// `products` and `components` are the catalog entries resolved by name
/// beforehand; anything the maps lack is an unknown reference.
pub fn validate_line_items(
    items: &[LineItem],
    products: &HashMap<String, Product>,
    components: &HashMap<String, Component>,
) -> AppResult<()> {
    for item in items {
        let product = products.get(&item.product_name).ok_or_else(|| {
            AppError::with_message(
                ErrorCode::ProductNotFound,
                format!("Product '{}' not found", item.product_name),
            )
        })?;

        if !product.active {
            return Err(AppError::validation(format!(
                "Product '{}' is not active",
                item.product_name
            )));
        }

        let mut kind_counts: HashMap<ComponentKind, u32> = HashMap::new();
        for selection in &item.selections {
            let component = components.get(selection).ok_or_else(|| {
                AppError::validation(format!(
                    "Selection '{}' does not match any component",
                    selection
                ))
            })?;

            if !component.active {
                return Err(AppError::validation(format!(
                    "Component '{}' is not active",
                    selection
                )));
            }

            // embalagem_separada is informational only; packaged components
            // still count toward their kind's cap.
            *kind_counts.entry(component.kind).or_insert(0) += 1;
        }

        if product.kind == ProductKind::Composite
            && let Some(rules) = &product.composition_rules
        {
            for (key, max) in rules {
                let Some(kind) = rule_kind(key) else {
                    tracing::debug!(rule = %key, product = %product.name, "Ignoring unknown composition rule");
                    continue;
                };
                let count = kind_counts.get(&kind).copied().unwrap_or(0);
                if count > *max {
                    return Err(AppError::with_message(
                        ErrorCode::CompositionRuleViolated,
                        format!(
                            "Product '{}' allows at most {} selection(s) for rule '{}', got {}",
                            product.name, max, key, count
                        ),
                    )
                    .with_detail("rule", key.clone())
                    .with_detail("max", *max)
                    .with_detail("count", count));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::ProductCategory;

    fn component(name: &str, kind: ComponentKind, active: bool) -> Component {
        Component {
            id: None,
            name: name.to_string(),
            kind,
            packaged_separately: false,
            extra_price_cents: 0,
            active,
            dietary_tags: Vec::new(),
        }
    }

    fn composite_product(name: &str, rules: &[(&str, u32)]) -> Product {
        Product {
            id: None,
            name: name.to_string(),
            description: String::new(),
            price_cents: 2600,
            image_url: String::new(),
            category: ProductCategory::MealBoxes,
            active: true,
            kind: ProductKind::Composite,
            composition_rules: Some(
                rules
                    .iter()
                    .map(|(k, v)| (k.to_string(), *v))
                    .collect(),
            ),
            dietary_tags: Vec::new(),
        }
    }

    fn item(product: &str, selections: &[&str]) -> LineItem {
        LineItem {
            product_name: product.to_string(),
            quantity: 1,
            unit_price_cents: 2600,
            selections: selections.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn catalog() -> (HashMap<String, Product>, HashMap<String, Component>) {
        let products = [composite_product(
            "Marmita Grande",
            &[("max_base", 1), ("max_proteina", 1), ("max_guarnicao", 2)],
        )]
        .into_iter()
        .map(|p| (p.name.clone(), p))
        .collect();

        let components = [
            component("Arroz Branco", ComponentKind::Base, true),
            component("Frango Grelhado", ComponentKind::Protein, true),
            component("Carne Moida", ComponentKind::Protein, true),
            component("Farofa", ComponentKind::Side, true),
            component("Banana Frita", ComponentKind::Side, true),
            component("Salada Antiga", ComponentKind::Side, false),
        ]
        .into_iter()
        .map(|c| (c.name.clone(), c))
        .collect();

        (products, components)
    }

    #[test]
    fn test_within_rules_accepted() {
        let (products, components) = catalog();
        let items = vec![item(
            "Marmita Grande",
            &["Arroz Branco", "Frango Grelhado", "Farofa", "Banana Frita"],
        )];
        assert!(validate_line_items(&items, &products, &components).is_ok());
    }

    #[test]
    fn test_protein_cap_exceeded() {
        let (products, components) = catalog();
        let items = vec![item(
            "Marmita Grande",
            &["Arroz Branco", "Frango Grelhado", "Carne Moida"],
        )];
        let err = validate_line_items(&items, &products, &components)
            .expect_err("two proteins must fail");
        assert_eq!(err.code, ErrorCode::CompositionRuleViolated);
    }

    #[test]
    fn test_unknown_product_rejected() {
        let (products, components) = catalog();
        let items = vec![item("Marmita Inexistente", &[])];
        let err = validate_line_items(&items, &products, &components)
            .expect_err("unknown product must fail");
        assert_eq!(err.code, ErrorCode::ProductNotFound);
    }

    #[test]
    fn test_unknown_selection_rejected() {
        let (products, components) = catalog();
        let items = vec![item("Marmita Grande", &["Arroz Integral"])];
        let err = validate_line_items(&items, &products, &components)
            .expect_err("unknown selection must fail");
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_inactive_selection_rejected() {
        let (products, components) = catalog();
        let items = vec![item("Marmita Grande", &["Salada Antiga"])];
        let err = validate_line_items(&items, &products, &components)
            .expect_err("inactive selection must fail");
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_inactive_product_rejected() {
        let (mut products, components) = catalog();
        products.get_mut("Marmita Grande").unwrap().active = false;
        let items = vec![item("Marmita Grande", &[])];
        let err = validate_line_items(&items, &products, &components)
            .expect_err("inactive product must fail");
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_unknown_rule_key_ignored() {
        let (mut products, components) = catalog();
        products
            .get_mut("Marmita Grande")
            .unwrap()
            .composition_rules
            .as_mut()
            .unwrap()
            .insert("max_sobremesa".to_string(), 0);
        let items = vec![item("Marmita Grande", &["Arroz Branco"])];
        assert!(validate_line_items(&items, &products, &components).is_ok());
    }

    #[test]
    fn test_simple_product_selections_resolved_but_unconstrained() {
        let (mut products, components) = catalog();
        let mut simple = composite_product("Feijoada Pronta", &[]);
        simple.kind = ProductKind::Simple;
        simple.composition_rules = None;
        products.insert(simple.name.clone(), simple);

        // No caps apply, but selections still have to exist in the catalog
        let items = vec![item("Feijoada Pronta", &["Farofa", "Banana Frita"])];
        assert!(validate_line_items(&items, &products, &components).is_ok());

        let items = vec![item("Feijoada Pronta", &["Acompanhamento Fantasma"])];
        assert!(validate_line_items(&items, &products, &components).is_err());
    }
}
