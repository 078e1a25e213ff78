//! In-crate test doubles for the foreign runtime.
//!
//! Wrapper constructors take the factory explicitly, so every test can run
//! against these recorders instead of a live runtime.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::object::{ForeignObject, Handle, ObjectFactory, Value};

/// A recording stand-in for one foreign object.
pub(crate) struct FakeObject {
    class: String,
    properties: RefCell<HashMap<String, Value>>,
    calls: RefCell<Vec<(String, Vec<Value>)>>,
}

impl FakeObject {
    pub fn new(class: &str) -> Rc<Self> {
        Rc::new(Self {
            class: class.to_string(),
            properties: RefCell::new(HashMap::new()),
            calls: RefCell::new(Vec::new()),
        })
    }

    /// Downcasts a handle produced by the fake layer.
    pub fn of(handle: &Handle) -> &FakeObject {
        handle
            .as_any()
            .downcast_ref::<FakeObject>()
            .expect("handle is not a FakeObject")
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    /// Every `(method, args)` call recorded so far.
    pub fn calls(&self) -> Vec<(String, Vec<Value>)> {
        self.calls.borrow().clone()
    }

    pub fn properties(&self) -> HashMap<String, Value> {
        self.properties.borrow().clone()
    }

    pub fn set_property(&self, name: &str, value: Value) {
        self.properties.borrow_mut().insert(name.to_string(), value);
    }
}

impl ForeignObject for FakeObject {
    fn call(&self, method: &str, args: &[Value]) -> Value {
        self.calls
            .borrow_mut()
            .push((method.to_string(), args.to_vec()));
        match method {
            // A copy behaves like the foreign runtime's: a fresh object
            // carrying the same data.
            "copy" => {
                let copied = FakeObject::new(&self.class);
                *copied.properties.borrow_mut() = self.properties.borrow().clone();
                Value::Object(copied)
            }
            "toJSON" => Value::String(self.class.clone()),
            _ => Value::Undefined,
        }
    }

    fn get(&self, property: &str) -> Value {
        self.properties
            .borrow()
            .get(property)
            .cloned()
            .unwrap_or(Value::Undefined)
    }

    fn set(&self, property: &str, value: Value) {
        self.properties
            .borrow_mut()
            .insert(property.to_string(), value);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A recording stand-in for the foreign library namespace.
pub(crate) struct FakeFactory {
    param_names: HashMap<String, Vec<&'static str>>,
    constructed: RefCell<Vec<(String, Vec<Value>)>>,
}

impl FakeFactory {
    pub fn new() -> Self {
        Self {
            param_names: HashMap::new(),
            constructed: RefCell::new(Vec::new()),
        }
    }

    /// Registers the positional parameter names of a class so constructed
    /// objects expose their arguments as named properties, the way the
    /// foreign constructors do.
    pub fn with_param_names(mut self, class: &str, names: &[&'static str]) -> Self {
        self.param_names.insert(class.to_string(), names.to_vec());
        self
    }

    /// Every `(class, args)` construct call recorded so far.
    pub fn constructed(&self) -> Vec<(String, Vec<Value>)> {
        self.constructed.borrow().clone()
    }

    /// Calls recorded on a handle produced by the fake layer.
    pub fn calls_of(&self, handle: &Handle) -> Vec<(String, Vec<Value>)> {
        FakeObject::of(handle).calls()
    }
}

impl ObjectFactory for FakeFactory {
    fn construct(&self, class: &str, args: &[Value]) -> Handle {
        self.constructed
            .borrow_mut()
            .push((class.to_string(), args.to_vec()));
        let object = FakeObject::new(class);
        if let Some(names) = self.param_names.get(class) {
            for (name, value) in names.iter().zip(args) {
                object.set_property(name, value.clone());
            }
        }
        object
    }
}
