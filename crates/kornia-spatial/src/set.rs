//! # Actions on sets of spatial vectors
//!
//! Dynamics algorithms move whole Jacobians and motion/force subspaces between frames.
//! These are sets of `N` spatial vectors, one per column. The [`motion_set`] and
//! [`force_set`] namespaces apply the rigid transform and motion actions to every
//! column of such a set.
//!
//! A set is anything implementing [`SpatialSet`]:
//!
//! | Set | Columns known at |
//! |-----|------------------|
//! | [`Motion`] / [`Force`] | compile time (1) |
//! | `[Motion; N]` / `[Force; N]` | compile time (N) |
//! | `[Motion]`, `Vec<Motion>` and the force equivalents | run time |
//!
//! When both sides hold exactly one column at compile time the single-vector kernel is
//! called directly. Otherwise the columns are processed one by one, column `i` of the
//! output depending only on column `i` of the input. With the `parallel` feature, sets
//! of at least [`PARALLEL_MIN_COLS`] columns are split across the rayon thread pool.
//!
//! Each namespace provides three flavours of every action:
//!
//! - `se3_action`, `se3_action_inverse`, `motion_action`: the fast path. Mismatched
//!   column counts are a caller bug; they panic in debug builds and only touch the
//!   common prefix of columns in release builds.
//! - `try_*`: checked twins returning [`SpatialError`] on mismatched column counts.
//! - `*_mat`: the same actions on run-time shaped `6 x N` [`faer`] matrices. Both the
//!   row and the column counts are validated.

use faer::{MatMut, MatRef};

use crate::{error::SpatialError, Force, Motion};

/// Number of rows of a spatial vector.
pub const SPATIAL_DIM: usize = 6;

/// Minimum number of columns for which the `parallel` feature splits the work.
pub const PARALLEL_MIN_COLS: usize = 64;

/// A set of spatial vectors stored column by column.
pub trait SpatialSet {
    /// The spatial vector type of every column.
    type Column: Copy + Send + Sync;

    /// Number of columns when known at compile time.
    const COLS_AT_COMPILE_TIME: Option<usize>;

    /// The columns of the set.
    fn columns(&self) -> &[Self::Column];

    /// The mutable columns of the set.
    fn columns_mut(&mut self) -> &mut [Self::Column];

    /// Number of columns of the set.
    #[inline]
    fn cols(&self) -> usize {
        self.columns().len()
    }
}

macro_rules! impl_spatial_set {
    ($column:ty) => {
        impl SpatialSet for $column {
            type Column = $column;
            const COLS_AT_COMPILE_TIME: Option<usize> = Some(1);

            #[inline]
            fn columns(&self) -> &[Self::Column] {
                std::slice::from_ref(self)
            }

            #[inline]
            fn columns_mut(&mut self) -> &mut [Self::Column] {
                std::slice::from_mut(self)
            }
        }

        impl<const N: usize> SpatialSet for [$column; N] {
            type Column = $column;
            const COLS_AT_COMPILE_TIME: Option<usize> = Some(N);

            #[inline]
            fn columns(&self) -> &[Self::Column] {
                self.as_slice()
            }

            #[inline]
            fn columns_mut(&mut self) -> &mut [Self::Column] {
                self.as_mut_slice()
            }
        }

        impl SpatialSet for [$column] {
            type Column = $column;
            const COLS_AT_COMPILE_TIME: Option<usize> = None;

            #[inline]
            fn columns(&self) -> &[Self::Column] {
                self
            }

            #[inline]
            fn columns_mut(&mut self) -> &mut [Self::Column] {
                self
            }
        }

        impl SpatialSet for Vec<$column> {
            type Column = $column;
            const COLS_AT_COMPILE_TIME: Option<usize> = None;

            #[inline]
            fn columns(&self) -> &[Self::Column] {
                self.as_slice()
            }

            #[inline]
            fn columns_mut(&mut self) -> &mut [Self::Column] {
                self.as_mut_slice()
            }
        }
    };
}

impl_spatial_set!(Motion);
impl_spatial_set!(Force);

/// Apply `kernel` to every column of `src`, writing the matching column of `dst`.
#[inline]
pub(crate) fn act_on_set<I, O, F>(src: &I, dst: &mut O, kernel: F)
where
    I: SpatialSet + ?Sized,
    O: SpatialSet<Column = I::Column> + ?Sized,
    F: Fn(&I::Column) -> I::Column + Sync,
{
    if I::COLS_AT_COMPILE_TIME == Some(1) && O::COLS_AT_COMPILE_TIME == Some(1) {
        dst.columns_mut()[0] = kernel(&src.columns()[0]);
        return;
    }

    debug_assert_eq!(
        src.cols(),
        dst.cols(),
        "source and destination sets must have the same number of columns"
    );

    act_on_columns(src.columns(), dst.columns_mut(), kernel);
}

fn act_on_columns<C, F>(src: &[C], dst: &mut [C], kernel: F)
where
    C: Copy + Send + Sync,
    F: Fn(&C) -> C + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if src.len() >= PARALLEL_MIN_COLS {
            log::trace!("acting on {} spatial columns in parallel", src.len());
            dst.par_iter_mut()
                .zip(src.par_iter())
                .for_each(|(d, s)| *d = kernel(s));
            return;
        }
    }

    dst.iter_mut().zip(src.iter()).for_each(|(d, s)| *d = kernel(s));
}

pub(crate) fn check_cols(src: usize, dst: usize) -> Result<(), SpatialError> {
    if src != dst {
        log::debug!("rejecting set action: {src} source columns, {dst} destination columns");
        return Err(SpatialError::ColumnCountMismatch { src, dst });
    }
    Ok(())
}

pub(crate) fn check_rows(rows: usize) -> Result<(), SpatialError> {
    if rows != SPATIAL_DIM {
        log::debug!("rejecting spatial matrix with {rows} rows");
        return Err(SpatialError::InvalidRowCount {
            expected: SPATIAL_DIM,
            got: rows,
        });
    }
    Ok(())
}

/// Apply `kernel` to every column of a `6 x N` matrix.
pub(crate) fn act_on_mat<C, F>(
    src: MatRef<'_, f64>,
    mut dst: MatMut<'_, f64>,
    kernel: F,
) -> Result<(), SpatialError>
where
    C: From<[f64; SPATIAL_DIM]> + Into<[f64; SPATIAL_DIM]>,
    F: Fn(&C) -> C,
{
    check_rows(src.nrows())?;
    check_rows(dst.nrows())?;
    check_cols(src.ncols(), dst.ncols())?;

    for j in 0..src.ncols() {
        let mut col = [0.0; SPATIAL_DIM];
        for (i, x) in col.iter_mut().enumerate() {
            *x = src.read(i, j);
        }

        // the whole input column is read before the output column is written
        let out: [f64; SPATIAL_DIM] = kernel(&C::from(col)).into();
        for (i, x) in out.into_iter().enumerate() {
            dst.write(i, j, x);
        }
    }

    Ok(())
}

macro_rules! define_set_actions {
    ($column:ident, $name:literal) => {
        use faer::{MatMut, MatRef};

        use crate::{
            action::{MotionAction, Se3Action},
            error::SpatialError,
            set::{act_on_mat, act_on_set, check_cols, SpatialSet},
            transform::RigidTransform,
            $column,
        };

        #[doc = concat!("Rigid transform action on a set of ", $name, "s: `dst = m * src`.")]
        ///
        /// Every column of `src`, expressed in frame `i`, is expressed in frame `j` and
        /// written to the same column of `dst`, where `m` maps `i` to `j`.
        ///
        /// PRECONDITION: `src` and `dst` have the same number of columns.
        #[inline]
        pub fn se3_action<T, I, O>(m: &T, src: &I, dst: &mut O)
        where
            T: RigidTransform + Sync + ?Sized,
            I: SpatialSet<Column = $column> + ?Sized,
            O: SpatialSet<Column = $column> + ?Sized,
        {
            act_on_set(src, dst, |x| x.se3_action(m));
        }

        #[doc = concat!("Inverse rigid transform action on a set of ", $name, "s: `dst = m^-1 * src`.")]
        ///
        /// PRECONDITION: `src` and `dst` have the same number of columns.
        #[inline]
        pub fn se3_action_inverse<T, I, O>(m: &T, src: &I, dst: &mut O)
        where
            T: RigidTransform + Sync + ?Sized,
            I: SpatialSet<Column = $column> + ?Sized,
            O: SpatialSet<Column = $column> + ?Sized,
        {
            act_on_set(src, dst, |x| x.se3_action_inverse(m));
        }

        #[doc = concat!("Action of the motion `v` on a set of ", $name, "s: `dst = v x src`.")]
        ///
        /// PRECONDITION: `src` and `dst` have the same number of columns.
        #[inline]
        pub fn motion_action<I, O>(v: &crate::Motion, src: &I, dst: &mut O)
        where
            I: SpatialSet<Column = $column> + ?Sized,
            O: SpatialSet<Column = $column> + ?Sized,
        {
            act_on_set(src, dst, |x| x.motion_action(v));
        }

        /// Checked version of [`se3_action`].
        ///
        /// # Errors
        ///
        /// [`SpatialError::ColumnCountMismatch`] if the sets have different widths.
        pub fn try_se3_action<T, I, O>(
            m: &T,
            src: &I,
            dst: &mut O,
        ) -> Result<(), SpatialError>
        where
            T: RigidTransform + Sync + ?Sized,
            I: SpatialSet<Column = $column> + ?Sized,
            O: SpatialSet<Column = $column> + ?Sized,
        {
            check_cols(src.cols(), dst.cols())?;
            se3_action(m, src, dst);
            Ok(())
        }

        /// Checked version of [`se3_action_inverse`].
        ///
        /// # Errors
        ///
        /// [`SpatialError::ColumnCountMismatch`] if the sets have different widths.
        pub fn try_se3_action_inverse<T, I, O>(
            m: &T,
            src: &I,
            dst: &mut O,
        ) -> Result<(), SpatialError>
        where
            T: RigidTransform + Sync + ?Sized,
            I: SpatialSet<Column = $column> + ?Sized,
            O: SpatialSet<Column = $column> + ?Sized,
        {
            check_cols(src.cols(), dst.cols())?;
            se3_action_inverse(m, src, dst);
            Ok(())
        }

        /// Checked version of [`motion_action`].
        ///
        /// # Errors
        ///
        /// [`SpatialError::ColumnCountMismatch`] if the sets have different widths.
        pub fn try_motion_action<I, O>(
            v: &crate::Motion,
            src: &I,
            dst: &mut O,
        ) -> Result<(), SpatialError>
        where
            I: SpatialSet<Column = $column> + ?Sized,
            O: SpatialSet<Column = $column> + ?Sized,
        {
            check_cols(src.cols(), dst.cols())?;
            motion_action(v, src, dst);
            Ok(())
        }

        #[doc = concat!("[`se3_action`] on `6 x N` matrices whose columns are ", $name, "s.")]
        ///
        /// # Errors
        ///
        /// [`SpatialError::InvalidRowCount`] if a matrix does not have 6 rows,
        /// [`SpatialError::ColumnCountMismatch`] if the matrices have different widths.
        pub fn se3_action_mat<T>(
            m: &T,
            src: MatRef<'_, f64>,
            dst: MatMut<'_, f64>,
        ) -> Result<(), SpatialError>
        where
            T: RigidTransform + ?Sized,
        {
            act_on_mat(src, dst, |x: &$column| x.se3_action(m))
        }

        #[doc = concat!("[`se3_action_inverse`] on `6 x N` matrices whose columns are ", $name, "s.")]
        ///
        /// # Errors
        ///
        /// See [`se3_action_mat`].
        pub fn se3_action_inverse_mat<T>(
            m: &T,
            src: MatRef<'_, f64>,
            dst: MatMut<'_, f64>,
        ) -> Result<(), SpatialError>
        where
            T: RigidTransform + ?Sized,
        {
            act_on_mat(src, dst, |x: &$column| x.se3_action_inverse(m))
        }

        #[doc = concat!("[`motion_action`] on `6 x N` matrices whose columns are ", $name, "s.")]
        ///
        /// # Errors
        ///
        /// See [`se3_action_mat`].
        pub fn motion_action_mat(
            v: &crate::Motion,
            src: MatRef<'_, f64>,
            dst: MatMut<'_, f64>,
        ) -> Result<(), SpatialError> {
            act_on_mat(src, dst, |x: &$column| x.motion_action(v))
        }
    };
}

/// Actions on sets of spatial motions (twists, Jacobian columns, motion subspaces).
pub mod motion_set {
    define_set_actions!(Motion, "motion");
}

/// Actions on sets of spatial forces (wrenches, force subspaces).
pub mod force_set {
    define_set_actions!(Force, "force");
}
