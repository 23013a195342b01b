use crate::*;
use fxhash::FxHashMap;
use std::collections::HashSet;

/// Several useful (mostly internal) low-level utility methods for `Bdd`s.
impl Bdd {
    /// The number of nodes in this `Bdd`, terminals included. (Do not confuse
    /// with cardinality.)
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// The number of inputs of the Boolean function represented by this `Bdd`.
    pub fn num_inputs(&self) -> u16 {
        // The terminal nodes carry the input count as their variable marker.
        self.nodes[0].var.0
    }

    /// Pointer to the root of the decision diagram.
    pub fn root_pointer(&self) -> BddPointer {
        self.root
    }

    /// Get the low link of the node at a specified location.
    pub fn low_link_of(&self, node: BddPointer) -> BddPointer {
        self.nodes[node.to_index()].low_link
    }

    /// Get the high link of the node at a specified location.
    pub fn high_link_of(&self, node: BddPointer) -> BddPointer {
        self.nodes[node.to_index()].high_link
    }

    /// Get the input tested by the node at a specified location.
    ///
    /// Note that this also works for terminals, where it returns the input
    /// count of the `Bdd` — i.e. a value strictly greater than every decision
    /// variable, which is what makes terminals transparent to the
    /// interleaving logic of the construction algorithms.
    pub fn var_of(&self, node: BddPointer) -> BddVariable {
        self.nodes[node.to_index()].var
    }

    /// True if this `Bdd` is exactly the `false` function.
    pub fn is_false(&self) -> bool {
        self.root.is_zero()
    }

    /// True if this `Bdd` is exactly the `true` function.
    pub fn is_true(&self) -> bool {
        self.root.is_one()
    }

    /// True if this `Bdd` represents a constant function.
    pub fn is_constant(&self) -> bool {
        self.root.is_terminal()
    }

    /// If this `Bdd` is a constant function, convert it to `bool`, otherwise
    /// return `None`.
    pub fn as_bool(&self) -> Option<bool> {
        self.root.as_bool()
    }

    /// Create a new `Bdd` for the `false` function.
    pub fn mk_false(num_inputs: u16) -> Bdd {
        Bdd {
            nodes: vec![BddNode::mk_zero(num_inputs), BddNode::mk_one(num_inputs)],
            root: BddPointer::zero(),
        }
    }

    /// Create a new `Bdd` for the `true` function.
    pub fn mk_true(num_inputs: u16) -> Bdd {
        Bdd {
            nodes: vec![BddNode::mk_zero(num_inputs), BddNode::mk_one(num_inputs)],
            root: BddPointer::one(),
        }
    }

    /// Create a new `Bdd` for a constant function with the given value.
    pub fn mk_constant(num_inputs: u16, value: bool) -> Bdd {
        if value {
            Bdd::mk_true(num_inputs)
        } else {
            Bdd::mk_false(num_inputs)
        }
    }

    /// Create a `Bdd` of the function that returns the value of input `var`.
    ///
    /// *Panics:* `var` must be an input of the function, i.e. `var < num_inputs`.
    pub fn mk_var(num_inputs: u16, var: BddVariable) -> Bdd {
        if var.0 >= num_inputs {
            panic!(
                "Cannot test input {} in a function of {} inputs.",
                var, num_inputs
            );
        }
        let mut bdd = Bdd::mk_false(num_inputs);
        bdd.root = bdd.push_node(BddNode::mk_node(var, BddPointer::zero(), BddPointer::one()));
        bdd
    }

    /// Create a `Bdd` of the function that returns the negated value of
    /// input `var`.
    pub fn mk_not_var(num_inputs: u16, var: BddVariable) -> Bdd {
        if var.0 >= num_inputs {
            panic!(
                "Cannot test input {} in a function of {} inputs.",
                var, num_inputs
            );
        }
        let mut bdd = Bdd::mk_false(num_inputs);
        bdd.root = bdd.push_node(BddNode::mk_node(var, BddPointer::one(), BddPointer::zero()));
        bdd
    }

    /// Create a `Bdd` of the literal `var` (when `value` is true) or
    /// `!var` (when `value` is false).
    pub fn mk_literal(num_inputs: u16, var: BddVariable, value: bool) -> Bdd {
        if value {
            Bdd::mk_var(num_inputs, var)
        } else {
            Bdd::mk_not_var(num_inputs, var)
        }
    }

    /// **(internal)** Append a new node to this `Bdd` and return its index.
    ///
    /// The caller is responsible for having established uniqueness of the node
    /// beforehand — use `mk_unique` unless assembling a known graph by hand.
    pub(crate) fn push_node(&mut self, node: BddNode) -> BddPointer {
        self.nodes.push(node);
        BddPointer::from_index(self.nodes.len() - 1)
    }

    /// **(internal)** The hash-consing primitive maintaining canonical form.
    ///
    /// Returns the shared child when the node is redundant (`low == high`),
    /// the index of a structurally identical node when one already exists in
    /// `existing`, and otherwise appends the node. Every construction
    /// algorithm emits nodes exclusively through this function, which is what
    /// keeps every constructed graph reduced — there is no separate global
    /// reduction pass.
    ///
    /// `existing` must index exactly the nodes of this `Bdd` (terminals
    /// included) and is scoped to one algorithm invocation.
    pub(crate) fn mk_unique(
        &mut self,
        node: BddNode,
        existing: &mut FxHashMap<BddNode, BddPointer>,
    ) -> BddPointer {
        if node.low_link == node.high_link {
            return node.low_link;
        }
        if cfg!(feature = "shields_up")
            && (self.var_of(node.low_link) <= node.var || self.var_of(node.high_link) <= node.var)
        {
            panic!("Input ordering violated by node {:?}.", node);
        }
        if let Some(pointer) = existing.get(&node) {
            *pointer
        } else {
            let pointer = self.push_node(node);
            existing.insert(node, pointer);
            pointer
        }
    }

    /// **(internal)** Create an iterator over all pointers of the `Bdd`
    /// (including terminals!).
    ///
    /// The iteration order is the same as the underlying representation, so
    /// you can expect terminals to be the first two nodes.
    pub(crate) fn pointers(&self) -> impl Iterator<Item = BddPointer> {
        (0..self.size()).map(BddPointer::from_index)
    }

    /// Return the set of all inputs that actually appear as decision
    /// conditions in this `Bdd`.
    pub fn support_set(&self) -> HashSet<BddVariable> {
        self.nodes.iter().skip(2).map(|node| node.var).collect()
    }

    /// Approximately compute the number of valuations satisfying the function
    /// represented by this `Bdd`.
    pub fn cardinality(&self) -> f64 {
        if self.is_false() {
            return 0.0;
        }
        let mut cache = vec![None; self.nodes.len()];
        cache[0] = Some(0.0);
        cache[1] = Some(1.0);
        let mut stack: Vec<BddPointer> = vec![self.root_pointer()];
        while let Some(node) = stack.last() {
            if cache[node.to_index()].is_some() {
                stack.pop();
            } else {
                let low = self.low_link_of(*node);
                let high = self.high_link_of(*node);
                let low_var = self.var_of(low).0;
                let high_var = self.var_of(high).0;
                let node_var = self.var_of(*node).0;
                let low = low.to_index();
                let high = high.to_index();

                if cache[low].is_some() && cache[high].is_some() {
                    let low_cardinality =
                        cache[low].unwrap() * 2.0_f64.powi((low_var - node_var - 1) as i32);
                    let high_cardinality =
                        cache[high].unwrap() * 2.0_f64.powi((high_var - node_var - 1) as i32);
                    cache[node.to_index()] = Some(low_cardinality + high_cardinality);
                    stack.pop();
                } else {
                    if cache[low].is_none() {
                        stack.push(BddPointer::from_index(low));
                    }
                    if cache[high].is_none() {
                        stack.push(BddPointer::from_index(high));
                    }
                }
            }
        }
        let r = cache[self.root.to_index()].unwrap()
            * 2.0_f64.powi(self.var_of(self.root).0 as i32);
        if r.is_nan() {
            f64::INFINITY
        } else {
            r
        }
    }

    /// Check that this `Bdd` is structurally sound: terminals are encoded
    /// correctly, every link is in bounds, every decision node tests an input
    /// strictly smaller than both of its children (the ordering invariant),
    /// and no node is redundant or duplicated (the reduction invariant).
    pub fn validate(&self) -> Result<(), String> {
        if self.nodes.len() < 2 {
            return Err("Missing terminal nodes.".to_string());
        }
        if !self.nodes[0].is_zero() {
            return Err("Node at position 0 must be the zero terminal.".to_string());
        }
        if !self.nodes[1].is_one() {
            return Err("Node at position 1 must be the one terminal.".to_string());
        }
        let num_inputs = self.nodes[0].var;
        if self.nodes[1].var != num_inputs {
            return Err("Terminal nodes disagree on the input count.".to_string());
        }
        if self.root.to_index() >= self.nodes.len() {
            return Err(format!("Root {} out of bounds.", self.root));
        }

        let mut seen: HashSet<BddNode> = HashSet::new();
        for pointer in self.pointers().skip(2) {
            let node = self.nodes[pointer.to_index()];
            if node.var >= num_inputs {
                return Err(format!("Found invalid input index: {:?}.", node.var));
            }
            if node.low_link.to_index() >= self.nodes.len() {
                return Err(format!("Found invalid low-link: {:?}.", node.low_link));
            }
            if node.high_link.to_index() >= self.nodes.len() {
                return Err(format!("Found invalid high-link: {:?}.", node.high_link));
            }
            if node.low_link == node.high_link {
                return Err(format!("Found redundant node at {}.", pointer));
            }
            if self.var_of(node.low_link) <= node.var || self.var_of(node.high_link) <= node.var {
                return Err(format!("Found broken child ordering in node at {}.", pointer));
            }
            if !seen.insert(node) {
                return Err(format!("Found duplicate node at {}.", pointer));
            }
        }

        Ok(())
    }
}
