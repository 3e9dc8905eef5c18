use super::{Parameter, Placement};

/// A model exposes its learnable parameters as an ordered sequence.
///
/// The order must be stable across calls, two models of the same architecture must yield
/// their parameters in the same order so they can be paired.
pub trait Model {
    /// Returns the model's parameters in traversal order.
    fn parameters(&self) -> Vec<&Parameter>;

    /// Returns the model's parameters in traversal order, mutably.
    fn parameters_mut(&mut self) -> Vec<&mut Parameter>;

    /// Returns where the model lives, that is, where its first parameter lives.
    fn placement(&self) -> Placement {
        self.parameters()
            .first()
            .map(|param| param.placement())
            .unwrap_or_default()
    }

    /// Moves every parameter of the model to `placement`.
    fn place(&mut self, placement: Placement) {
        for param in self.parameters_mut() {
            param.set_placement(placement);
        }
    }
}

impl Model for Vec<Parameter> {
    fn parameters(&self) -> Vec<&Parameter> {
        self.iter().collect()
    }

    fn parameters_mut(&mut self) -> Vec<&mut Parameter> {
        self.iter_mut().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_model_lives_on_cpu() {
        let model: Vec<Parameter> = Vec::new();
        assert_eq!(model.placement(), Placement::Cpu);
    }

    #[test]
    fn place_moves_every_parameter() {
        let mut model = vec![
            Parameter::zeros(&[2]).unwrap(),
            Parameter::zeros(&[1, 3]).unwrap(),
        ];

        model.place(Placement::Accelerator(1));

        assert_eq!(model.placement(), Placement::Accelerator(1));
        assert!(
            model
                .parameters()
                .iter()
                .all(|p| p.placement() == Placement::Accelerator(1))
        );
    }
}
