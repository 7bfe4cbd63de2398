pub mod execution_provider;
pub mod model_loader;
pub mod onnx_yolo_detector;
