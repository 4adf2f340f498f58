//! Host-array boundary.
//!
//! Host environments hand over flat buffers of one numeric kind and expect a freshly allocated
//! buffer of the same kind back, holding one (by default 1-based) index per query. This module
//! enforces the boundary preconditions (non-empty buffers, sorted list, matching kinds) and
//! converts the 0-based indices of the core into host numbering.
//!
//! Two element kinds are supported: `f64` and `i32`.

use std::fmt;

use num_traits::NumCast;

use floorsearch_common::{Result, error::Error};

use crate::{
    config::SearchConfig,
    sorted_seq::SortedSeq,
    trace::{NoTrace, SearchTrace},
};

/// Element kinds accepted at the host boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Float64,
    Int32,
}

impl ElementKind {
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Float64 => "float64",
            ElementKind::Int32 => "int32",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ElementKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "f64" | "float64" | "double" => Ok(ElementKind::Float64),
            "i32" | "int32" => Ok(ElementKind::Int32),
            _ => Err(Error::invalid_arg(
                "kind",
                format!("unsupported element kind '{s}'"),
            )),
        }
    }
}

/// A scalar kind that can cross the host boundary, carrying result indices in its own type.
pub trait HostElement: PartialOrd + Copy + NumCast + fmt::Debug {
    const KIND: ElementKind;

    /// Converts a result index (already shifted to host numbering) into this kind.
    fn from_index(index: usize) -> Result<Self> {
        <Self as NumCast>::from(index).ok_or_else(|| {
            Error::invalid_arg(
                "index",
                format!("{index} is not representable as {}", Self::KIND),
            )
        })
    }
}

macro_rules! impl_host_element {
    ($ty:ty, $kind:expr) => {
        impl HostElement for $ty {
            const KIND: ElementKind = $kind;
        }
    };
}

impl_host_element!(f64, ElementKind::Float64);
impl_host_element!(i32, ElementKind::Int32);

/// Searches `list` for the predecessor of every item, with the default configuration.
///
/// Returns one index per item, 1-based, in the element kind of the inputs.
pub fn search_sorted_list<T: HostElement>(list: &[T], items: &[T]) -> Result<Vec<T>> {
    search_sorted_list_with(list, items, &SearchConfig::default(), &mut NoTrace)
}

/// Searches `list` for the predecessor of every item.
///
/// The list is verified per `config.verify_sequence_order`; without verification the caller
/// guarantees that it is sorted. An unsorted list then gives unspecified (but in-bounds)
/// indices rather than an error.
pub fn search_sorted_list_with<T, R>(
    list: &[T],
    items: &[T],
    config: &SearchConfig,
    trace: &mut R,
) -> Result<Vec<T>>
where
    T: HostElement,
    R: SearchTrace<T> + ?Sized,
{
    let seq = if config.verify_sequence_order {
        SortedSeq::try_new(list)?
    } else {
        SortedSeq::new_unchecked(list)?
    };
    let offset = config.index_base.offset();
    seq.batch_with(items, config, trace)?
        .into_iter()
        .map(|index| T::from_index(index + offset))
        .collect()
}

/// A borrowed host buffer of either supported kind.
#[derive(Debug, Clone, Copy)]
pub enum HostArrayRef<'a> {
    Float64(&'a [f64]),
    Int32(&'a [i32]),
}

impl HostArrayRef<'_> {
    pub fn kind(&self) -> ElementKind {
        match self {
            HostArrayRef::Float64(_) => ElementKind::Float64,
            HostArrayRef::Int32(_) => ElementKind::Int32,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            HostArrayRef::Float64(values) => values.len(),
            HostArrayRef::Int32(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An owned host buffer of either supported kind.
#[derive(Debug, Clone, PartialEq)]
pub enum HostArray {
    Float64(Vec<f64>),
    Int32(Vec<i32>),
}

impl HostArray {
    pub fn kind(&self) -> ElementKind {
        self.view().kind()
    }

    pub fn len(&self) -> usize {
        self.view().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn view(&self) -> HostArrayRef<'_> {
        match self {
            HostArray::Float64(values) => HostArrayRef::Float64(values),
            HostArray::Int32(values) => HostArrayRef::Int32(values),
        }
    }
}

impl From<Vec<f64>> for HostArray {
    fn from(values: Vec<f64>) -> Self {
        HostArray::Float64(values)
    }
}

impl From<Vec<i32>> for HostArray {
    fn from(values: Vec<i32>) -> Self {
        HostArray::Int32(values)
    }
}

/// Dispatches on the element kind of the host buffers and runs the batch search.
///
/// Both buffers must be of the same kind; the result is of that kind as well.
pub fn search_host_arrays<R>(
    list: HostArrayRef<'_>,
    items: HostArrayRef<'_>,
    config: &SearchConfig,
    trace: &mut R,
) -> Result<HostArray>
where
    R: SearchTrace<f64> + SearchTrace<i32> + ?Sized,
{
    match (list, items) {
        (HostArrayRef::Float64(list), HostArrayRef::Float64(items)) => {
            search_sorted_list_with(list, items, config, trace).map(HostArray::Float64)
        }
        (HostArrayRef::Int32(list), HostArrayRef::Int32(items)) => {
            search_sorted_list_with(list, items, config, trace).map(HostArray::Int32)
        }
        (list, items) => Err(Error::kind_mismatch(
            list.kind().name(),
            items.kind().name(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IndexBase;
    use floorsearch_common::ErrorKind;

    #[test]
    fn test_search_sorted_list_one_based() {
        let list = [1.0, 3.0, 3.0, 5.0, 7.0];
        assert_eq!(
            search_sorted_list(&list, &[1.0, 3.0, 6.0]).unwrap(),
            vec![1.0, 3.0, 4.0]
        );

        let list = [1, 3, 3, 5, 7];
        assert_eq!(search_sorted_list(&list, &[1, 3, 6]).unwrap(), vec![1, 3, 4]);
    }

    #[test]
    fn test_search_sorted_list_zero_based() {
        let config = SearchConfig::default().with_index_base(IndexBase::Zero);
        let result =
            search_sorted_list_with(&[10, 10, 10], &[10], &config, &mut NoTrace).unwrap();
        assert_eq!(result, vec![2]);
    }

    #[test]
    fn test_search_sorted_list_preconditions() {
        let err = search_sorted_list::<f64>(&[], &[1.0]).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::EmptyInput { name } if name == "sequence"));

        let err = search_sorted_list(&[1.0], &[]).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::EmptyInput { name } if name == "queries"));

        let err = search_sorted_list(&[5, 4], &[1]).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::UnsortedInput { .. }));

        let err = search_sorted_list(&[1.0, 2.0], &[f64::NAN]).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::IncomparableValue { .. }));
    }

    #[test]
    fn test_search_sorted_list_unverified() {
        let config = SearchConfig::unverified();
        let list = [1.0, 3.0, 3.0, 5.0, 7.0];
        let items = [0.0, 1.0, 3.0, 6.0, 9.0];
        assert_eq!(
            search_sorted_list_with(&list, &items, &config, &mut NoTrace).unwrap(),
            search_sorted_list(&list, &items).unwrap()
        );

        // An unsorted list is accepted and answered with an in-bounds index.
        assert_eq!(
            search_sorted_list_with(&[5, 4, 3], &[4], &config, &mut NoTrace).unwrap(),
            vec![3]
        );

        let err =
            search_sorted_list_with::<i32, _>(&[], &[4], &config, &mut NoTrace).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::EmptyInput { name } if name == "sequence"));
    }

    #[test]
    fn test_from_index_overflow() {
        assert_eq!(i32::from_index(7).unwrap(), 7);
        assert_eq!(f64::from_index(7).unwrap(), 7.0);
        let err = i32::from_index(i32::MAX as usize + 1).unwrap_err();
        assert!(
            matches!(err.kind(), ErrorKind::InvalidArgument { name, .. } if name == "index")
        );
    }

    #[test]
    fn test_search_host_arrays() {
        let list = HostArray::from(vec![1, 3, 3, 5, 7]);
        let items = HostArray::from(vec![0, 3, 7]);
        let config = SearchConfig::default();
        let result = search_host_arrays(list.view(), items.view(), &config, &mut NoTrace).unwrap();
        assert_eq!(result, HostArray::Int32(vec![1, 3, 5]));
        assert_eq!(result.kind(), ElementKind::Int32);
        assert_eq!(result.len(), 3);

        let items = HostArray::from(vec![1.0]);
        let err = search_host_arrays(list.view(), items.view(), &config, &mut NoTrace).unwrap_err();
        match err.kind() {
            ErrorKind::KindMismatch { expected, actual } => {
                assert_eq!(expected, "int32");
                assert_eq!(actual, "float64");
            }
            other => panic!("unexpected error kind: {other:?}"),
        }
    }

    #[test]
    fn test_element_kind_parse() {
        assert_eq!("f64".parse::<ElementKind>().unwrap(), ElementKind::Float64);
        assert_eq!("int32".parse::<ElementKind>().unwrap(), ElementKind::Int32);
        assert!("u8".parse::<ElementKind>().is_err());
        assert_eq!(ElementKind::Float64.to_string(), "float64");
    }
}
