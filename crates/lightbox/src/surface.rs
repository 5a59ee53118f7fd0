use lightbox_geometry::Rect;

use crate::layout::Keyframe;

/// Where the transitioning content is drawn.
pub trait PresentationSurface {
    fn set_frame(&mut self, frame: Rect);

    /// 0 is no blur, 1 is full blur.
    fn set_blur_intensity(&mut self, intensity: f32);

    fn apply(&mut self, keyframe: Keyframe) {
        self.set_frame(keyframe.frame);
        self.set_blur_intensity(keyframe.blur);
    }
}

impl<S: PresentationSurface + ?Sized> PresentationSurface for &mut S {
    fn set_frame(&mut self, frame: Rect) {
        (**self).set_frame(frame);
    }

    fn set_blur_intensity(&mut self, intensity: f32) {
        (**self).set_blur_intensity(intensity);
    }

    fn apply(&mut self, keyframe: Keyframe) {
        (**self).apply(keyframe);
    }
}
