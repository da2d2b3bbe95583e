//! Geometry fixtures shared by the unit tests. Each shape has two distinct values so that
//! replacement can be checked as well as round-trips.

pub(crate) mod linestring;
