//! Callable values: native built-ins and lambdas.

use crate::error::Result;
use crate::value::Value;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// The implementation of a native built-in.
pub type NativeFn = dyn Fn(&[Value]) -> Result<Value> + Send + Sync;

/// A built-in function value, e.g. `$sum`.
#[derive(Clone)]
pub struct NativeFunction {
    pub name: String,
    /// Type signature in JSONata notation, e.g. `<a<n>:n>`.
    pub signature: Option<String>,
    implementation: Arc<NativeFn>,
}

impl NativeFunction {
    pub fn new<F>(name: impl Into<String>, implementation: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        NativeFunction {
            name: name.into(),
            signature: None,
            implementation: Arc::new(implementation),
        }
    }

    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    pub fn call(&self, args: &[Value]) -> Result<Value> {
        (self.implementation)(args)
    }
}

/// A user-defined `function($x) { ... }` value.
///
/// The body is owned by the evaluator and is opaque here.
#[derive(Clone)]
pub struct Lambda {
    pub params: Vec<String>,
    pub signature: Option<String>,
    pub body: Arc<dyn Any + Send + Sync>,
}

impl Lambda {
    pub fn new<B>(params: Vec<String>, body: B) -> Self
    where
        B: Any + Send + Sync,
    {
        Lambda {
            params,
            signature: None,
            body: Arc::new(body),
        }
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Returns the body if it has the evaluator's expected type.
    pub fn body<B: Any>(&self) -> Option<&B> {
        self.body.downcast_ref::<B>()
    }
}

/// Anything the evaluator can apply to arguments.
#[derive(Clone)]
pub enum Function {
    Native(NativeFunction),
    Lambda(Lambda),
}

impl Function {
    pub fn arity(&self) -> Option<usize> {
        match self {
            Function::Native(_) => None,
            Function::Lambda(l) => Some(l.arity()),
        }
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Function::Native(a), Function::Native(b)) => {
                Arc::ptr_eq(&a.implementation, &b.implementation)
            }
            (Function::Lambda(a), Function::Lambda(b)) => Arc::ptr_eq(&a.body, &b.body),
            _ => false,
        }
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Function::Native(n) => f
                .debug_struct("Native")
                .field("name", &n.name)
                .field("signature", &n.signature)
                .finish_non_exhaustive(),
            Function::Lambda(l) => f
                .debug_struct("Lambda")
                .field("params", &l.params)
                .field("signature", &l.signature)
                .finish_non_exhaustive(),
        }
    }
}

impl From<NativeFunction> for Function {
    fn from(f: NativeFunction) -> Self {
        Function::Native(f)
    }
}

impl From<Lambda> for Function {
    fn from(l: Lambda) -> Self {
        Function::Lambda(l)
    }
}
