use ndarray::{Array1, array};
use rand::{SeedableRng, rngs::StdRng};

use esrl::{
    EsrlErr,
    arch::{Model, Parameter, Sequential},
    initialization::{Init, Initializer},
    params::{flatten, num_params, restore},
};

fn random_model(dims: &[usize], seed: u64) -> Sequential {
    let normal = Init::Normal {
        mean: 0.,
        std_dev: 1.,
    };
    let init = Initializer {
        weights: normal,
        biases: normal,
    };

    let mut model = Sequential::from_dims(dims).unwrap();
    init.init(&mut model, &mut StdRng::seed_from_u64(seed)).unwrap();
    model
}

#[test]
fn flatten_order_example() {
    let model = vec![
        Parameter::from_shape_vec(&[2], vec![1., 2.]).unwrap(),
        Parameter::from_shape_vec(&[2, 1], vec![3., 4.]).unwrap(),
    ];

    assert_eq!(flatten(&model), array![1., 2., 3., 4.]);
}

#[test]
fn length_matches_the_sum_of_shapes() {
    let cases: [&[usize]; 3] = [&[1, 1], &[3, 5, 2], &[8, 16, 16, 4]];

    for dims in cases {
        let model = Sequential::from_dims(dims).unwrap();
        let expected: usize = model
            .parameters()
            .iter()
            .map(|p| p.shape().iter().product::<usize>())
            .sum();

        assert_eq!(flatten(&model).len(), expected);
        assert_eq!(num_params(&model), expected);
        assert_eq!(model.size(), expected);
    }

    let empty: Vec<Parameter> = Vec::new();
    assert!(flatten(&empty).is_empty());
}

#[test]
fn restore_of_flatten_leaves_the_model_unchanged() {
    let mut model = random_model(&[4, 8, 3], 11);
    let before = model.clone();

    let flat = flatten(&model);
    restore(&mut model, flat.view()).unwrap();

    assert_eq!(model, before);
}

#[test]
fn restore_moves_a_model_to_a_point_of_the_search_space() {
    let mut model = random_model(&[2, 3, 1], 5);

    let point = Array1::from_iter((0..num_params(&model)).map(|i| i as f64 / 10.));
    restore(&mut model, point.view()).unwrap();

    let first = &model.layers()[0];
    let second = &model.layers()[1];
    assert_eq!(flatten(&model), point);
    assert_eq!(first.biases().values(), array![0.6, 0.7, 0.8].into_dyn());
    assert_eq!(second.weights().values(), array![[0.9], [1.0], [1.1]].into_dyn());
}

#[test]
fn perturbing_the_flat_vector_perturbs_the_model() {
    let mut model = random_model(&[3, 2], 1);
    let mut flat = flatten(&model);
    flat[0] += 1.;

    restore(&mut model, flat.view()).unwrap();

    let weights = model.layers()[0].weights().values();
    assert_eq!(weights.iter().next().copied(), Some(flat[0]));
}

#[test]
fn restore_into_a_different_model_fails() {
    let small = random_model(&[2, 2], 0);
    let mut big = random_model(&[2, 3], 0);
    let before = flatten(&big);

    let res = restore(&mut big, flatten(&small).view());

    assert!(matches!(
        res,
        Err(EsrlErr::LengthMismatch {
            got: 6,
            expected: 9,
            ..
        })
    ));
    assert_eq!(flatten(&big), before);
}
