//! r3js Web - Browser adapter for the foreign-object bridge
//!
//! Implements the `r3js-core` traits over wasm-bindgen reflection, so the
//! typed wrappers drive the real JavaScript library when compiled for the
//! browser. Exceptions thrown by the library are not caught or translated:
//! `unwrap_throw` rethrows them to the JavaScript caller verbatim.

use std::rc::Rc;

use js_sys::{Array, Function, Reflect};
use r3js_core::{ForeignObject, Handle, ObjectFactory, Value};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// A JavaScript object behind the [`ForeignObject`] capabilities.
pub struct JsObject {
    inner: js_sys::Object,
}

impl JsObject {
    pub fn new(inner: js_sys::Object) -> Self {
        Self { inner }
    }

    /// Borrows the wrapped JavaScript object.
    pub fn inner(&self) -> &js_sys::Object {
        &self.inner
    }

    fn lookup(&self, name: &str) -> JsValue {
        Reflect::get(&self.inner, &JsValue::from_str(name)).unwrap_throw()
    }
}

impl ForeignObject for JsObject {
    fn call(&self, method: &str, args: &[Value]) -> Value {
        let function: Function = self.lookup(method).dyn_into().unwrap_throw();
        let result = function.apply(&self.inner, &to_js_array(args)).unwrap_throw();
        from_js(result)
    }

    fn get(&self, property: &str) -> Value {
        from_js(self.lookup(property))
    }

    fn set(&self, property: &str, value: Value) {
        Reflect::set(&self.inner, &JsValue::from_str(property), &to_js(&value)).unwrap_throw();
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// The factory over a `THREE`-style namespace object.
///
/// The namespace is an explicit value; nothing here reads ambient global
/// state once the factory exists.
pub struct ThreeNamespace {
    namespace: js_sys::Object,
}

impl ThreeNamespace {
    pub fn new(namespace: js_sys::Object) -> Self {
        Self { namespace }
    }

    /// Reads the named global (typically `"THREE"`) from the window once
    /// and returns it as an explicit factory value. `None` when the global
    /// is absent or not an object.
    pub fn from_window(name: &str) -> Option<Self> {
        let window = web_sys::window()?;
        let namespace = Reflect::get(&window, &JsValue::from_str(name)).ok()?;
        Some(Self::new(namespace.dyn_into().ok()?))
    }
}

impl ObjectFactory for ThreeNamespace {
    fn construct(&self, class: &str, args: &[Value]) -> Handle {
        let constructor: Function = Reflect::get(&self.namespace, &JsValue::from_str(class))
            .unwrap_throw()
            .dyn_into()
            .unwrap_throw();
        let object = Reflect::construct(&constructor, &to_js_array(args)).unwrap_throw();
        Rc::new(JsObject::new(object.unchecked_into()))
    }
}

fn to_js_array(args: &[Value]) -> Array {
    let array = Array::new();
    for arg in args {
        array.push(&to_js(arg));
    }
    array
}

fn to_js(value: &Value) -> JsValue {
    match value {
        Value::Undefined => JsValue::UNDEFINED,
        Value::Bool(b) => JsValue::from_bool(*b),
        Value::Number(n) => JsValue::from_f64(*n),
        Value::String(s) => JsValue::from_str(s),
        // A handle crossing back into JavaScript must have come from this
        // adapter; anything else has no JavaScript identity to unwrap.
        Value::Object(handle) => handle
            .as_any()
            .downcast_ref::<JsObject>()
            .unwrap_throw()
            .inner()
            .clone()
            .into(),
    }
}

fn from_js(value: JsValue) -> Value {
    if value.is_undefined() || value.is_null() {
        Value::Undefined
    } else if let Some(b) = value.as_bool() {
        Value::Bool(b)
    } else if let Some(n) = value.as_f64() {
        Value::Number(n)
    } else if let Some(s) = value.as_string() {
        Value::String(s)
    } else {
        Value::Object(Rc::new(JsObject::new(value.unchecked_into())))
    }
}
