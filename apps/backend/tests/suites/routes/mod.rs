mod pets_create;
