use crate::tensor::Tensor;

#[test]
fn test_save_load() {
    let dir = tempfile::tempdir().unwrap();
    let tensor = Tensor::new(&[1., 2., 3., 4., 5., 6.], &[1, 2, 3]);

    let path = dir.path().join("tensor.bin");
    tensor.save(&path).unwrap();
    assert_eq!(Tensor::load(&path).unwrap(), tensor);

    let path = dir.path().join("tensor.npy");
    tensor.save_npy(&path).unwrap();
    assert_eq!(Tensor::load_npy(&path).unwrap(), tensor);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Tensor::load(dir.path().join("missing.bin")).is_err());
    assert!(Tensor::load_npy(dir.path().join("missing.npy")).is_err());
}
