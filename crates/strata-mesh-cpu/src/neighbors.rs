use strata_geom::IVec3;

/// Solidity of world voxels outside the chunk being meshed. Positions outside
/// the world must report `false`.
pub trait SolidQuery {
    fn is_solid_at(&self, pos: IVec3) -> bool;
}

impl<F> SolidQuery for F
where
    F: Fn(IVec3) -> bool,
{
    #[inline]
    fn is_solid_at(&self, pos: IVec3) -> bool {
        self(pos)
    }
}

/// Treats everything outside the chunk as air.
#[derive(Clone, Copy, Debug, Default)]
pub struct OpenBoundary;

impl SolidQuery for OpenBoundary {
    #[inline]
    fn is_solid_at(&self, _pos: IVec3) -> bool {
        false
    }
}
