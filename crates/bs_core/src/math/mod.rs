//! Numerical routines shared by the pricing layer.

pub mod solvers;
