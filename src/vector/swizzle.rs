//! Multi-component accessors (`v.xy()`, `v.zyx()`, ...), gated behind the
//! `swizzle` cargo feature.

use crate::Vector;

macro_rules! swizzles {
    ($n:literal => { $($name:ident -> $m:literal [$($comp:ident),+]);+ $(;)? }) => {
        impl<T: Copy> Vector<T, $n> {
            $(
                #[doc = concat!(
                    "Returns the (",
                    stringify!($($comp),+),
                    ") components of this vector, in that order.",
                )]
                #[inline]
                pub fn $name(&self) -> Vector<T, $m> {
                    Vector::from([$(self.$comp),+])
                }
            )+
        }
    };
}

swizzles!(2 => {
    xx -> 2 [x, x];
    xy -> 2 [x, y];
    yx -> 2 [y, x];
    yy -> 2 [y, y];
});

swizzles!(3 => {
    xx -> 2 [x, x];
    xy -> 2 [x, y];
    xz -> 2 [x, z];
    yx -> 2 [y, x];
    yy -> 2 [y, y];
    yz -> 2 [y, z];
    zx -> 2 [z, x];
    zy -> 2 [z, y];
    zz -> 2 [z, z];

    xxx -> 3 [x, x, x];
    xxy -> 3 [x, x, y];
    xxz -> 3 [x, x, z];
    xyx -> 3 [x, y, x];
    xyy -> 3 [x, y, y];
    xyz -> 3 [x, y, z];
    xzx -> 3 [x, z, x];
    xzy -> 3 [x, z, y];
    xzz -> 3 [x, z, z];
    yxx -> 3 [y, x, x];
    yxy -> 3 [y, x, y];
    yxz -> 3 [y, x, z];
    yyx -> 3 [y, y, x];
    yyy -> 3 [y, y, y];
    yyz -> 3 [y, y, z];
    yzx -> 3 [y, z, x];
    yzy -> 3 [y, z, y];
    yzz -> 3 [y, z, z];
    zxx -> 3 [z, x, x];
    zxy -> 3 [z, x, y];
    zxz -> 3 [z, x, z];
    zyx -> 3 [z, y, x];
    zyy -> 3 [z, y, y];
    zyz -> 3 [z, y, z];
    zzx -> 3 [z, z, x];
    zzy -> 3 [z, z, y];
    zzz -> 3 [z, z, z];
});

// For 4-dimensional vectors the full set would have 336 entries; only the
// pairs and the permutations of distinct components are provided.
swizzles!(4 => {
    xx -> 2 [x, x];
    xy -> 2 [x, y];
    xz -> 2 [x, z];
    xw -> 2 [x, w];
    yx -> 2 [y, x];
    yy -> 2 [y, y];
    yz -> 2 [y, z];
    yw -> 2 [y, w];
    zx -> 2 [z, x];
    zy -> 2 [z, y];
    zz -> 2 [z, z];
    zw -> 2 [z, w];
    wx -> 2 [w, x];
    wy -> 2 [w, y];
    wz -> 2 [w, z];
    ww -> 2 [w, w];

    xyz -> 3 [x, y, z];
    xyw -> 3 [x, y, w];
    xzy -> 3 [x, z, y];
    xzw -> 3 [x, z, w];
    xwy -> 3 [x, w, y];
    xwz -> 3 [x, w, z];
    yxz -> 3 [y, x, z];
    yxw -> 3 [y, x, w];
    yzx -> 3 [y, z, x];
    yzw -> 3 [y, z, w];
    ywx -> 3 [y, w, x];
    ywz -> 3 [y, w, z];
    zxy -> 3 [z, x, y];
    zxw -> 3 [z, x, w];
    zyx -> 3 [z, y, x];
    zyw -> 3 [z, y, w];
    zwx -> 3 [z, w, x];
    zwy -> 3 [z, w, y];
    wxy -> 3 [w, x, y];
    wxz -> 3 [w, x, z];
    wyx -> 3 [w, y, x];
    wyz -> 3 [w, y, z];
    wzx -> 3 [w, z, x];
    wzy -> 3 [w, z, y];

    xyzw -> 4 [x, y, z, w];
    xywz -> 4 [x, y, w, z];
    xzyw -> 4 [x, z, y, w];
    xzwy -> 4 [x, z, w, y];
    xwyz -> 4 [x, w, y, z];
    xwzy -> 4 [x, w, z, y];
    yxzw -> 4 [y, x, z, w];
    yxwz -> 4 [y, x, w, z];
    yzxw -> 4 [y, z, x, w];
    yzwx -> 4 [y, z, w, x];
    ywxz -> 4 [y, w, x, z];
    ywzx -> 4 [y, w, z, x];
    zxyw -> 4 [z, x, y, w];
    zxwy -> 4 [z, x, w, y];
    zyxw -> 4 [z, y, x, w];
    zywx -> 4 [z, y, w, x];
    zwxy -> 4 [z, w, x, y];
    zwyx -> 4 [z, w, y, x];
    wxyz -> 4 [w, x, y, z];
    wxzy -> 4 [w, x, z, y];
    wyxz -> 4 [w, y, x, z];
    wyzx -> 4 [w, y, z, x];
    wzxy -> 4 [w, z, x, y];
    wzyx -> 4 [w, z, y, x];
});

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, vec4};

    #[test]
    fn swizzle() {
        let v = vec3(1, 2, 3);
        assert_eq!(v.zyx(), vec3(3, 2, 1));
        assert_eq!(v.xy(), vec2(1, 2));
        assert_eq!(v.yy(), vec2(2, 2));
        assert_eq!(v.xyz(), v);

        let v = vec4(1, 2, 3, 4);
        assert_eq!(v.wzyx(), vec4(4, 3, 2, 1));
        assert_eq!(v.zw(), vec2(3, 4));
        assert_eq!(v.yzw(), vec3(2, 3, 4));

        let v = vec2(1, 2);
        assert_eq!(v.yx(), vec2(2, 1));
        assert_eq!(v.xx(), vec2(1, 1));
    }
}
