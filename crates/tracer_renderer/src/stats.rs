//! Per-pass tracing counters.

/// Counters collected while shading.
///
/// Buckets rendered on different threads each collect their own and are
/// merged afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceStats {
    /// Camera rays cast
    pub primary_rays: u64,
    /// Reflection rays cast
    pub reflection_rays: u64,
    /// Shadow rays cast
    pub shadow_rays: u64,
    /// Calls into the shading function, at any depth
    pub shade_calls: u64,
    /// Deepest recursion depth that was shaded
    pub max_depth: u32,
}

impl TraceStats {
    pub(crate) fn record_shade(&mut self, depth: u32) {
        self.shade_calls += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    /// Combine counters from two disjoint parts of a render.
    pub fn merge(self, other: TraceStats) -> TraceStats {
        TraceStats {
            primary_rays: self.primary_rays + other.primary_rays,
            reflection_rays: self.reflection_rays + other.reflection_rays,
            shadow_rays: self.shadow_rays + other.shadow_rays,
            shade_calls: self.shade_calls + other.shade_calls,
            max_depth: self.max_depth.max(other.max_depth),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge() {
        let mut a = TraceStats::default();
        a.primary_rays = 4;
        a.record_shade(0);
        a.record_shade(3);

        let mut b = TraceStats::default();
        b.primary_rays = 2;
        b.shadow_rays = 7;
        b.record_shade(1);

        let merged = a.merge(b);
        assert_eq!(merged.primary_rays, 6);
        assert_eq!(merged.shadow_rays, 7);
        assert_eq!(merged.shade_calls, 3);
        assert_eq!(merged.max_depth, 3);
    }
}
