//! Surface materials.
//!
//! A material maps a surface parametrisation (u, v) to a colour and carries
//! the coefficients the shading engine reads: reflection, transparency and
//! gloss.

use tracer_math::Color;

/// Capabilities every material variant provides.
pub trait SurfaceMaterial {
    /// Colour at texture coordinates (u, v).
    fn color_at(&self, u: f64, v: f64) -> Color;

    /// Weight of the reflected colour, in [0, 1].
    fn reflection(&self) -> f64;

    /// Used to lighten shadows cast by this material.
    fn transparency(&self) -> f64;

    /// Highlight sharpness. Shininess is `10^(gloss + 1)`.
    fn gloss(&self) -> f64;

    /// Whether `color_at` depends on (u, v).
    fn has_texture(&self) -> bool {
        false
    }
}

/// Fold `t` into [-1, 1) with period 2.
pub fn wrap_up(t: f64) -> f64 {
    let mut t = t % 2.0;
    if t < -1.0 {
        t += 2.0;
    }
    if t >= 1.0 {
        t -= 2.0;
    }
    t
}

/// Constant-colour material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solid {
    pub color: Color,
    pub reflection: f64,
    /// Stored for scene descriptions that set it; the tracer has no
    /// refraction and never reads it.
    pub refraction: f64,
    pub transparency: f64,
    pub gloss: f64,
}

impl Solid {
    pub fn new(color: Color, reflection: f64, refraction: f64, transparency: f64, gloss: f64) -> Self {
        Self {
            color,
            reflection,
            refraction,
            transparency,
            gloss,
        }
    }
}

impl SurfaceMaterial for Solid {
    fn color_at(&self, _u: f64, _v: f64) -> Color {
        self.color
    }

    fn reflection(&self) -> f64 {
        self.reflection
    }

    fn transparency(&self) -> f64 {
        self.transparency
    }

    fn gloss(&self) -> f64 {
        self.gloss
    }
}

/// Two colours alternating in a checker pattern over (u, v).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Checkerboard {
    pub color_even: Color,
    pub color_odd: Color,
    pub reflection: f64,
    pub transparency: f64,
    pub gloss: f64,
    /// Checks per unit of u and v, halved: the pattern repeats every
    /// `2 / density`.
    pub density: f64,
}

impl Checkerboard {
    pub fn new(
        color_even: Color,
        color_odd: Color,
        reflection: f64,
        transparency: f64,
        gloss: f64,
        density: f64,
    ) -> Self {
        Self {
            color_even,
            color_odd,
            reflection,
            transparency,
            gloss,
            density,
        }
    }
}

impl SurfaceMaterial for Checkerboard {
    fn color_at(&self, u: f64, v: f64) -> Color {
        let t = wrap_up(u * self.density) * wrap_up(v * self.density);
        if t < 0.0 {
            self.color_even
        } else {
            self.color_odd
        }
    }

    fn reflection(&self) -> f64 {
        self.reflection
    }

    fn transparency(&self) -> f64 {
        self.transparency
    }

    fn gloss(&self) -> f64 {
        self.gloss
    }

    fn has_texture(&self) -> bool {
        true
    }
}

/// Any material a shape can carry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    Solid(Solid),
    Checkerboard(Checkerboard),
}

impl Material {
    fn inner(&self) -> &dyn SurfaceMaterial {
        match self {
            Material::Solid(m) => m,
            Material::Checkerboard(m) => m,
        }
    }
}

impl SurfaceMaterial for Material {
    fn color_at(&self, u: f64, v: f64) -> Color {
        self.inner().color_at(u, v)
    }

    fn reflection(&self) -> f64 {
        self.inner().reflection()
    }

    fn transparency(&self) -> f64 {
        self.inner().transparency()
    }

    fn gloss(&self) -> f64 {
        self.inner().gloss()
    }

    fn has_texture(&self) -> bool {
        self.inner().has_texture()
    }
}

impl From<Solid> for Material {
    fn from(m: Solid) -> Self {
        Material::Solid(m)
    }
}

impl From<Checkerboard> for Material {
    fn from(m: Checkerboard) -> Self {
        Material::Checkerboard(m)
    }
}
