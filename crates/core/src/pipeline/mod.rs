pub mod analyze_image_use_case;
pub mod frame_processor;
