mod containment;
