//! Hand-off to the embedded payment checkout widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! The widget is a third-party script the host page may load, exposing a
//! global `Razorpay` constructor. This module only builds its options object,
//! opens it, and turns its completion callback into a
//! [`PaymentVerification`]. When the script is absent the hand-off fails and
//! the upgrade page reports it.

#[cfg(test)]
#[path = "checkout_test.rs"]
mod checkout_test;

use crate::net::types::{PaymentVerification, User};
use crate::state::upgrade::WidgetHandle;

pub const WIDGET_GLOBAL: &str = "Razorpay";
pub const WIDGET_TITLE: &str = "SpendWise";
pub const WIDGET_THEME_COLOR: &str = "#3b82f6";

/// Why the widget could not be opened.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CheckoutError {
    #[error("checkout widget is not loaded")]
    NotLoaded,
    #[error("checkout widget failed: {0}")]
    Script(String),
}

/// Build the verification body from the widget's success payload fields.
/// Returns `None` if any of the three is missing.
pub fn verification_from_fields<F>(field: F) -> Option<PaymentVerification>
where
    F: Fn(&str) -> Option<String>,
{
    let present = |key: &str| field(key).filter(|v| !v.trim().is_empty());
    Some(PaymentVerification {
        order_id: present("razorpay_order_id")?,
        payment_id: present("razorpay_payment_id")?,
        signature: present("razorpay_signature")?,
    })
}

/// Open the widget for `handle`.
///
/// `on_paid` receives the verification body once the user pays; `on_dismiss`
/// runs when the widget is closed without paying or returns an incomplete
/// payload. Each callback runs at most once.
///
/// # Errors
///
/// [`CheckoutError::NotLoaded`] without the widget script; `Script` when the
/// constructor or `open()` throws.
#[cfg(feature = "hydrate")]
pub fn open_widget<P, D>(handle: &WidgetHandle, user: Option<&User>, on_paid: P, on_dismiss: D) -> Result<(), CheckoutError>
where
    P: FnOnce(PaymentVerification) + 'static,
    D: FnOnce() + 'static,
{
    use std::cell::RefCell;
    use std::rc::Rc;

    use js_sys::{Array, Function, Object, Reflect};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), CheckoutError> {
        Reflect::set(target, &JsValue::from_str(key), value)
            .map(|_| ())
            .map_err(|e| CheckoutError::Script(format!("{e:?}")))
    }

    let window = web_sys::window().ok_or(CheckoutError::NotLoaded)?;
    let ctor = Reflect::get(&window, &JsValue::from_str(WIDGET_GLOBAL))
        .ok()
        .and_then(|v| v.dyn_into::<Function>().ok())
        .ok_or(CheckoutError::NotLoaded)?;

    // Both callbacks share one slot so whichever fires first wins.
    let on_dismiss: Rc<RefCell<Option<D>>> = Rc::new(RefCell::new(Some(on_dismiss)));
    let dismiss_after_paid = Rc::clone(&on_dismiss);

    let handler = Closure::once_into_js(move |response: JsValue| {
        let field = |key: &str| Reflect::get(&response, &JsValue::from_str(key)).ok().and_then(|v| v.as_string());
        match verification_from_fields(field) {
            Some(verification) => {
                dismiss_after_paid.borrow_mut().take();
                on_paid(verification);
            }
            None => {
                log::warn!("checkout: widget returned an incomplete payload");
                if let Some(dismiss) = dismiss_after_paid.borrow_mut().take() {
                    dismiss();
                }
            }
        }
    });
    let ondismiss = Closure::once_into_js(move || {
        if let Some(dismiss) = on_dismiss.borrow_mut().take() {
            dismiss();
        }
    });

    let options = Object::new();
    set(&options, "key", &JsValue::from_str(&handle.key_id))?;
    #[allow(clippy::cast_precision_loss)]
    let amount = handle.amount_minor as f64;
    set(&options, "amount", &JsValue::from_f64(amount))?;
    set(&options, "currency", &JsValue::from_str(&handle.currency))?;
    set(&options, "name", &JsValue::from_str(WIDGET_TITLE))?;
    set(&options, "description", &JsValue::from_str(&handle.description))?;
    set(&options, "order_id", &JsValue::from_str(&handle.order_id))?;
    set(&options, "handler", &handler)?;

    if let Some(user) = user {
        let prefill = Object::new();
        set(&prefill, "name", &JsValue::from_str(&user.name))?;
        set(&prefill, "email", &JsValue::from_str(&user.email))?;
        set(&options, "prefill", &prefill)?;
    }
    let theme = Object::new();
    set(&theme, "color", &JsValue::from_str(WIDGET_THEME_COLOR))?;
    set(&options, "theme", &theme)?;
    let modal = Object::new();
    set(&modal, "ondismiss", &ondismiss)?;
    set(&options, "modal", &modal)?;

    let instance = Reflect::construct(&ctor, &Array::of1(&options)).map_err(|e| CheckoutError::Script(format!("{e:?}")))?;
    let open = Reflect::get(&instance, &JsValue::from_str("open"))
        .ok()
        .and_then(|v| v.dyn_into::<Function>().ok())
        .ok_or_else(|| CheckoutError::Script("widget has no open()".to_owned()))?;
    open.call0(&instance).map_err(|e| CheckoutError::Script(format!("{e:?}")))?;
    log::info!("checkout: widget opened for order {}", handle.order_id);
    Ok(())
}

/// Outside the browser there is no widget to open.
///
/// # Errors
///
/// Always [`CheckoutError::NotLoaded`].
#[cfg(not(feature = "hydrate"))]
pub fn open_widget<P, D>(handle: &WidgetHandle, user: Option<&User>, on_paid: P, on_dismiss: D) -> Result<(), CheckoutError>
where
    P: FnOnce(PaymentVerification) + 'static,
    D: FnOnce() + 'static,
{
    let _ = (handle, user, on_paid, on_dismiss);
    Err(CheckoutError::NotLoaded)
}
