mod cascade;
