use heck::{ToKebabCase, ToLowerCamelCase, ToPascalCase, ToSnakeCase};

use crate::error::{Result, StencilError};

/// The four naming-convention variants of a service name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseVariants {
    pub pascal: String,
    pub camel: String,
    pub kebab: String,
    pub snake: String,
}

impl CaseVariants {
    /// Derive all four variants from a raw identifier.
    ///
    /// Words are split on non-alphanumeric boundaries and lowercase-to-uppercase
    /// transitions, so `order-service`, `Order_Service` and `OrderService` all
    /// normalize to the same variants.
    pub fn derive(raw: &str) -> Result<Self> {
        if !raw.chars().any(|c| c.is_ascii_alphanumeric()) {
            return Err(StencilError::InvalidIdentifier {
                name: raw.to_string(),
            });
        }

        Ok(Self {
            pascal: raw.to_pascal_case(),
            camel: raw.to_lower_camel_case(),
            kebab: raw.to_kebab_case(),
            snake: raw.to_snake_case(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("order-service", "OrderService", "orderService", "order-service", "order_service")]
    #[case("Order_Service", "OrderService", "orderService", "order-service", "order_service")]
    #[case("OrderService", "OrderService", "orderService", "order-service", "order_service")]
    #[case("auth", "Auth", "auth", "auth", "auth")]
    #[case("v2-gateway", "V2Gateway", "v2Gateway", "v2-gateway", "v2_gateway")]
    fn test_derive_variants(
        #[case] raw: &str,
        #[case] pascal: &str,
        #[case] camel: &str,
        #[case] kebab: &str,
        #[case] snake: &str,
    ) {
        let v = CaseVariants::derive(raw).unwrap();
        assert_eq!(v.pascal, pascal);
        assert_eq!(v.camel, camel);
        assert_eq!(v.kebab, kebab);
        assert_eq!(v.snake, snake);
    }

    #[test]
    fn test_derive_is_idempotent_per_convention() {
        let v = CaseVariants::derive("order-service").unwrap();
        assert_eq!(CaseVariants::derive(&v.pascal).unwrap().pascal, v.pascal);
        assert_eq!(CaseVariants::derive(&v.camel).unwrap().camel, v.camel);
        assert_eq!(CaseVariants::derive(&v.kebab).unwrap().kebab, v.kebab);
        assert_eq!(CaseVariants::derive(&v.snake).unwrap().snake, v.snake);
    }

    #[rstest]
    #[case("")]
    #[case("---")]
    #[case("_ _")]
    fn test_derive_rejects_empty_tokenization(#[case] raw: &str) {
        let result = CaseVariants::derive(raw);
        assert!(matches!(
            result,
            Err(StencilError::InvalidIdentifier { .. })
        ));
    }
}
