//! Codecs and algorithms for trajectories: paths of coordinates that may carry an elevation and
//! a time measure.
//!
//! A [`LineString`][scalar::LineString] is generic over its coordinate kind ([`XY`][scalar::XY],
//! [`XYZ`][scalar::XYZ], [`XYM`][scalar::XYM] or [`XYZM`][scalar::XYZM]). It can be read from and
//! written to WKT and WKB, simplified with [`Simplify`][algorithm::Simplify] when it has an
//! elevation, and queried with [`LocateAtTime`][algorithm::LocateAtTime] when it has a time
//! measure.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub mod algorithm;
pub mod datatypes;
pub mod error;
pub mod io;
pub mod scalar;
