/// One of the six faces of a box, in its local frame.
///
/// Local axis `i` follows the `i`-th edge of the box: `NegX` is the face containing the box
/// origin and spanned by the second and third edges, `PosX` is the opposite face, and so on.
///
/// The declaration order is the canonical face order: when a lattice point lies on several
/// faces (i.e. on an edge or a corner), the first face in this order owns it.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Face {
    /// The face at the origin, normal to the first edge.
    NegX = 0,
    /// The face opposite to `NegX`.
    PosX = 1,
    /// The face at the origin, normal to the second edge.
    NegY = 2,
    /// The face opposite to `NegY`.
    PosY = 3,
    /// The face at the origin, normal to the third edge.
    NegZ = 4,
    /// The face opposite to `NegZ`.
    PosZ = 5,
}

impl Face {
    /// All the faces, in canonical order.
    pub const ALL: [Face; 6] = [
        Face::NegX,
        Face::PosX,
        Face::NegY,
        Face::PosY,
        Face::NegZ,
        Face::PosZ,
    ];

    /// The face with the given canonical index (in `[0, 6)`).
    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    /// The canonical index of this face.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The local axis this face is normal to.
    #[inline]
    pub fn axis(self) -> usize {
        self.index() / 2
    }

    /// Does this face contain the box origin?
    #[inline]
    pub fn is_negative(self) -> bool {
        self.index() % 2 == 0
    }

    /// The face on the other side of the box.
    pub fn opposite(self) -> Self {
        Self::ALL[self.index() ^ 1]
    }

    /// The two local axes spanning this face, in increasing order.
    pub fn tangent_axes(self) -> [usize; 2] {
        match self.axis() {
            0 => [1, 2],
            1 => [0, 2],
            _ => [0, 1],
        }
    }

    /// The mask containing only this face.
    #[inline]
    pub fn mask(self) -> FaceMask {
        FaceMask::from_bits_truncate(1 << self.index())
    }
}

bitflags::bitflags! {
    /// A set of faces of a box.
    ///
    /// Used to leave some faces of a boundary open (e.g. the top of a tank, or two opposing
    /// faces left free for inflow/outflow).
    #[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
    #[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
    pub struct FaceMask: u8 {
        /// The face at the origin, normal to the first edge.
        const NEG_X = 1 << 0;
        /// The face opposite to `NEG_X`.
        const POS_X = 1 << 1;
        /// The face at the origin, normal to the second edge.
        const NEG_Y = 1 << 2;
        /// The face opposite to `NEG_Y`.
        const POS_Y = 1 << 3;
        /// The face at the origin, normal to the third edge.
        const NEG_Z = 1 << 4;
        /// The face opposite to `NEG_Z`.
        const POS_Z = 1 << 5;
        /// Both faces normal to the first edge.
        const X = Self::NEG_X.bits() | Self::POS_X.bits();
        /// Both faces normal to the second edge.
        const Y = Self::NEG_Y.bits() | Self::POS_Y.bits();
        /// Both faces normal to the third edge.
        const Z = Self::NEG_Z.bits() | Self::POS_Z.bits();
        /// Every face.
        const ALL = Self::X.bits() | Self::Y.bits() | Self::Z.bits();
    }
}

impl FaceMask {
    /// Builds a mask from one flag per face, in canonical order.
    pub fn from_flags(flags: [bool; 6]) -> Self {
        Face::ALL
            .into_iter()
            .zip(flags)
            .filter(|(_, included)| *included)
            .fold(FaceMask::empty(), |mask, (face, _)| mask | face.mask())
    }

    /// Is `face` part of this mask?
    #[inline]
    pub fn includes(self, face: Face) -> bool {
        self.contains(face.mask())
    }

    /// Iterates through the faces of this mask, in canonical order.
    pub fn faces(self) -> impl Iterator<Item = Face> {
        Face::ALL.into_iter().filter(move |f| self.includes(*f))
    }
}

impl Default for FaceMask {
    fn default() -> Self {
        FaceMask::ALL
    }
}

impl From<[bool; 6]> for FaceMask {
    fn from(flags: [bool; 6]) -> Self {
        Self::from_flags(flags)
    }
}
