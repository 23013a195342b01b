use super::{Bdd, BddValuation, BddValuationIterator, BddVariable};
use std::fmt::{Display, Error, Formatter};
use std::ops::Index;

impl BddValuation {
    /// Create a new valuation from a vector of input values.
    pub fn new(values: Vec<bool>) -> BddValuation {
        BddValuation(values)
    }

    /// Create a valuation with all inputs set to false.
    pub fn all_false(num_inputs: u16) -> BddValuation {
        BddValuation(vec![false; num_inputs as usize])
    }

    /// Create a valuation with all inputs set to true.
    pub fn all_true(num_inputs: u16) -> BddValuation {
        BddValuation(vec![true; num_inputs as usize])
    }

    /// Flip the value of a given input.
    pub fn flip_value(&mut self, variable: BddVariable) {
        let i = variable.0 as usize;
        self.0[i] = !self.0[i];
    }

    /// Convert the valuation to its underlying vector.
    pub fn vector(self) -> Vec<bool> {
        self.0
    }

    /// Get the value of a specific input in this valuation.
    pub fn value(&self, variable: BddVariable) -> bool {
        self.0[variable.0 as usize]
    }

    /// Number of inputs in this valuation (used mostly for consistency checks).
    pub fn num_inputs(&self) -> u16 {
        self.0.len() as u16
    }

    /// **(internal)** "Increment" this valuation if possible. Interpret the valuation
    /// as a bit-vector (input 0 least significant) and perform a standard increment.
    /// This can be used to iterate over all valuations.
    pub(crate) fn next(&self) -> Option<BddValuation> {
        let mut next_vec = self.0.clone();
        let mut carry = true; // initially, we want to increment
        for bit in &mut next_vec {
            let new_value = *bit ^ carry;
            let new_carry = *bit && carry;
            *bit = new_value;
            carry = new_carry;
            if !new_carry {
                break;
            } // if there is no carry, we can just break
        }

        if carry {
            None
        } else {
            Some(BddValuation(next_vec))
        }
    }
}

impl Display for BddValuation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        if self.0.is_empty() {
            write!(f, "[]")?;
        } else {
            write!(f, "[{}", if self.0[0] { 1 } else { 0 })?;
            for i in 1..self.0.len() {
                write!(f, ",{}", if self.0[i] { 1 } else { 0 })?
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

/// Allow indexing of `BddValuation` using `BddVariable`s.
impl Index<BddVariable> for BddValuation {
    type Output = bool;

    fn index(&self, index: BddVariable) -> &Self::Output {
        &self.0[usize::from(index.0)]
    }
}

impl BddValuationIterator {
    /// Create a new iterator over all valuations of the given number of inputs,
    /// starting from the all-false assignment.
    pub fn new(num_inputs: u16) -> BddValuationIterator {
        BddValuationIterator(Some(BddValuation::all_false(num_inputs)))
    }
}

impl Iterator for BddValuationIterator {
    type Item = BddValuation;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(valuation) = &self.0 {
            let result = valuation.clone();
            self.0 = valuation.next();
            Some(result)
        } else {
            None
        }
    }
}

/// Methods for evaluating a `Bdd` as a Boolean function.
impl Bdd {
    /// Evaluate this `Bdd` in the specified valuation.
    ///
    /// The traversal starts at the root and at each decision node follows the
    /// low or high link depending on the value of the tested input; every
    /// input is consulted at most once, in increasing order.
    ///
    /// *Panics:* the valuation must assign exactly `num_inputs` inputs.
    pub fn eval_in(&self, valuation: &BddValuation) -> bool {
        if valuation.num_inputs() != self.num_inputs() {
            panic!(
                "The function has {} inputs, but the valuation has {}.",
                self.num_inputs(),
                valuation.num_inputs()
            );
        }
        let mut node = self.root_pointer();
        while !node.is_terminal() {
            let var = self.var_of(node);
            node = if valuation[var] {
                self.high_link_of(node)
            } else {
                self.low_link_of(node)
            }
        }
        node.is_one()
    }
}
