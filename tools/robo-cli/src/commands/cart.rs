//! Replay cart operations against a fresh storefront session.

use std::fmt;
use std::str::FromStr;

use anyhow::{Context as _, Result};
use robo_commerce::{ProductId, Storefront};
use thiserror::Error;

use super::CartArgs;
use crate::context::Context;

/// One cart operation given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartOp {
    Add(ProductId),
    Remove(ProductId),
    Set(ProductId, i64),
    Increment(ProductId),
    Decrement(ProductId),
    Open,
    Close,
}

/// Errors parsing a [`CartOp`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartOpError {
    #[error("unknown cart operation '{0}' (expected add, remove, set, inc, dec, open or close)")]
    UnknownOp(String),

    #[error("cart operation '{0}' needs a product id")]
    MissingId(String),

    #[error("set needs <id>=<quantity>, got '{0}'")]
    MalformedSet(String),

    #[error("invalid quantity '{0}'")]
    InvalidQuantity(String),
}

impl FromStr for CartOp {
    type Err = CartOpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (op, arg) = match s.split_once(':') {
            Some((op, arg)) => (op, Some(arg.trim())),
            None => (s, None),
        };

        let id = |name: &str| match arg {
            Some(id) if !id.is_empty() => Ok(ProductId::new(id)),
            _ => Err(CartOpError::MissingId(name.to_string())),
        };

        match op.to_lowercase().as_str() {
            "add" => Ok(CartOp::Add(id("add")?)),
            "remove" | "rm" => Ok(CartOp::Remove(id("remove")?)),
            "inc" => Ok(CartOp::Increment(id("inc")?)),
            "dec" => Ok(CartOp::Decrement(id("dec")?)),
            "set" => {
                let value = arg.ok_or_else(|| CartOpError::MissingId("set".to_string()))?;
                let (id, qty) = value
                    .split_once('=')
                    .ok_or_else(|| CartOpError::MalformedSet(value.to_string()))?;
                if id.is_empty() {
                    return Err(CartOpError::MissingId("set".to_string()));
                }
                let qty = qty
                    .trim()
                    .parse()
                    .map_err(|_| CartOpError::InvalidQuantity(qty.to_string()))?;
                Ok(CartOp::Set(ProductId::new(id), qty))
            }
            "open" if arg.is_none() => Ok(CartOp::Open),
            "close" if arg.is_none() => Ok(CartOp::Close),
            _ => Err(CartOpError::UnknownOp(s.to_string())),
        }
    }
}

impl fmt::Display for CartOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartOp::Add(id) => write!(f, "add:{}", id),
            CartOp::Remove(id) => write!(f, "remove:{}", id),
            CartOp::Set(id, qty) => write!(f, "set:{}={}", id, qty),
            CartOp::Increment(id) => write!(f, "inc:{}", id),
            CartOp::Decrement(id) => write!(f, "dec:{}", id),
            CartOp::Open => write!(f, "open"),
            CartOp::Close => write!(f, "close"),
        }
    }
}

impl CartOp {
    /// Apply to the session. Returns whether the cart changed.
    ///
    /// Only adding an id missing from the catalogue is an error; every other
    /// operation on an unknown id is a no-op.
    pub fn apply(&self, store: &mut Storefront) -> Result<bool> {
        let changed = match self {
            CartOp::Add(id) => {
                store
                    .add_to_cart(id)
                    .with_context(|| format!("Failed to apply {}", self))?;
                true
            }
            CartOp::Remove(id) => store.cart.remove_from_cart(id),
            CartOp::Set(id, qty) => store.cart.update_quantity(id, *qty),
            CartOp::Increment(id) => store.cart.increment(id),
            CartOp::Decrement(id) => store.cart.decrement(id),
            CartOp::Open => {
                store.open_cart();
                true
            }
            CartOp::Close => {
                store.close_cart();
                true
            }
        };
        Ok(changed)
    }
}

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_storefront(&args.source).await;

    for op in &args.ops {
        let changed = op.apply(&mut store)?;
        tracing::debug!(op = %op, changed, "applied cart operation");
    }

    let summary = store.cart.summary();
    if ctx.output.is_json() {
        ctx.output.json(&summary);
    } else {
        ctx.output.cart(&summary);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use robo_commerce::catalog::{CatalogueView, StaticCatalogue};
    use robo_commerce::Currency;

    fn op(s: &str) -> CartOp {
        s.parse().unwrap()
    }

    fn robotics_store() -> Storefront {
        let view = CatalogueView::with_products(StaticCatalogue::robotics().products().to_vec());
        Storefront::with_catalogue(Currency::USD, view)
    }

    #[test]
    fn test_parse_ops() {
        assert_eq!(op("add:1"), CartOp::Add(ProductId::new("1")));
        assert_eq!(op("remove:64f0c2"), CartOp::Remove(ProductId::new("64f0c2")));
        assert_eq!(op("set:3=4"), CartOp::Set(ProductId::new("3"), 4));
        assert_eq!(op("set:3=-1"), CartOp::Set(ProductId::new("3"), -1));
        assert_eq!(op("inc:2"), CartOp::Increment(ProductId::new("2")));
        assert_eq!(op("DEC:2"), CartOp::Decrement(ProductId::new("2")));
        assert_eq!(op("open"), CartOp::Open);
        assert_eq!(op("close"), CartOp::Close);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("buy:1".parse::<CartOp>(), Err(CartOpError::UnknownOp("buy:1".into())));
        assert_eq!("add".parse::<CartOp>(), Err(CartOpError::MissingId("add".into())));
        assert_eq!("add:".parse::<CartOp>(), Err(CartOpError::MissingId("add".into())));
        assert_eq!("set:3".parse::<CartOp>(), Err(CartOpError::MalformedSet("3".into())));
        assert_eq!("set:3=x".parse::<CartOp>(), Err(CartOpError::InvalidQuantity("x".into())));
        assert!("open:1".parse::<CartOp>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for s in ["add:1", "remove:2", "set:3=4", "inc:5", "dec:1", "open", "close"] {
            assert_eq!(op(s).to_string(), s);
        }
    }

    #[test]
    fn test_apply_sequence() {
        let mut store = robotics_store();
        for s in ["add:1", "add:1", "add:3", "inc:3", "dec:1", "open"] {
            op(s).apply(&mut store).unwrap();
        }

        assert_eq!(store.cart.line(&ProductId::new("1")).unwrap().quantity, 1);
        assert_eq!(store.cart.line(&ProductId::new("3")).unwrap().quantity, 2);
        assert_eq!(store.cart.cart_count(), 3);
        assert_eq!(store.cart.total().display(), "$14497.00");
        assert!(store.cart.is_open());
    }

    #[test]
    fn test_apply_noops() {
        let mut store = robotics_store();
        op("add:2").apply(&mut store).unwrap();

        assert!(!op("set:2=0").apply(&mut store).unwrap());
        assert!(!op("set:2=-1").apply(&mut store).unwrap());
        assert!(!op("remove:5").apply(&mut store).unwrap());
        assert!(!op("inc:5").apply(&mut store).unwrap());
        assert_eq!(store.cart.cart_count(), 1);
    }

    #[test]
    fn test_apply_unknown_add_fails() {
        let mut store = robotics_store();
        assert!(op("add:99").apply(&mut store).is_err());
        assert!(store.cart.is_empty());
    }
}
