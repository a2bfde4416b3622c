/// The six faces of a voxel, in texture-table order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    Back = 0,
    Front = 1,
    Top = 2,
    Bottom = 3,
    Left = 4,
    Right = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Back,
        Face::Front,
        Face::Top,
        Face::Bottom,
        Face::Left,
        Face::Right,
    ];

    /// Returns the `[0..6)` index of this face.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts a face index back into a `Face`; `None` for indices outside `[0..6)`.
    #[inline]
    pub fn from_index(i: usize) -> Option<Face> {
        Face::ALL.get(i).copied()
    }

    /// Integer grid step `(dx, dy, dz)` to the voxel across this face.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Face::Back => (0, 0, -1),
            Face::Front => (0, 0, 1),
            Face::Top => (0, 1, 0),
            Face::Bottom => (0, -1, 0),
            Face::Left => (-1, 0, 0),
            Face::Right => (1, 0, 0),
        }
    }

    #[inline]
    pub fn opposite(self) -> Face {
        match self {
            Face::Back => Face::Front,
            Face::Front => Face::Back,
            Face::Top => Face::Bottom,
            Face::Bottom => Face::Top,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
        }
    }
}
